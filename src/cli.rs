use acl_sphere::core::app_config::DEFAULT_CONFIG_PATH;
use acl_sphere::core::system::System;
use acl_sphere::model::error::misc::MiscError;
use acl_sphere::model::error::Error;
use acl_sphere::model::security_descriptor::SecurityDescriptor;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "AclSphere")]
#[command(version, about = "Capture and replay Windows file security descriptors as SDDL")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(short, long, global = true, env = "ACLSPHERE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the owner, group and SDDL of a file
    Show {
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save the security descriptor of a file as a snapshot
    Capture {
        path: PathBuf,

        /// Snapshot file to write instead of the configured directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a snapshot to its original file or to another one
    Restore {
        snapshot: PathBuf,

        /// File to apply the snapshot to
        #[arg(short, long)]
        target: Option<PathBuf>,
    },
}

pub async fn run(command: Commands, system: &System) -> Result<(), Error> {
    let manager = system.security_manager();

    match command {
        Commands::Show { path, json } => {
            let descriptor = manager.describe(path.clone()).await?;
            if json {
                let text = serde_json::to_string_pretty(&descriptor.into_map())
                    .map_err(MiscError::SerializeError)?;
                println!("{text}");
            } else {
                print_descriptor(&path, &descriptor);
            }
        }
        Commands::Capture { path, output } => {
            let (snapshot, written) = manager.capture(path, output).await?;
            println!("{} -> {}", snapshot.path.display(), written.display());
        }
        Commands::Restore { snapshot, target } => {
            let report = manager.restore(&snapshot, target).await?;
            print_descriptor(&report.target, &report.observed);
            if report.matches() {
                println!("restored: descriptor matches snapshot {}", report.snapshot.uuid);
            } else {
                println!("restored: descriptor differs from snapshot {}", report.snapshot.uuid);
            }
        }
    }

    Ok(())
}

fn print_descriptor(path: &Path, descriptor: &SecurityDescriptor) {
    println!("path:  {}", path.display());
    println!("owner: {}", descriptor.owner);
    println!("group: {}", descriptor.group);
    println!("sddl:  {}", descriptor.dacl);
}
