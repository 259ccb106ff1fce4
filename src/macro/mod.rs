pub mod traceable;
