use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Expr, Token};

struct LogInput {
    value: Expr,
    context: Option<Expr>,
}

impl Parse for LogInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let value = input.parse::<Expr>()?;

        let context = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(LogInput { value, context })
    }
}

pub fn log_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LogInput);

    let value_expr = &input.value;

    let context = match &input.context {
        Some(context) => quote! { Some(format!("{:?}", #context)) },
        None => quote! { None::<String> },
    };

    quote! {
        {
            let value = &#value_expr;
            let level = value.level();
            let message = value.to_string();
            let source = std::error::Error::source(value).map(|source| format!("{:#}", source));
            let context: Option<String> = #context;

            match (level, source, context) {
                (tracing::Level::ERROR, source, context) => tracing::error!(message = %message, source = ?source, context = ?context),
                (tracing::Level::WARN, source, context) => tracing::warn!(message = %message, source = ?source, context = ?context),
                (tracing::Level::INFO, None, None) => tracing::info!("{}", message),
                (tracing::Level::INFO, source, context) => tracing::info!(message = %message, source = ?source, context = ?context),
                (tracing::Level::DEBUG, source, context) => tracing::debug!(message = %message, source = ?source, context = ?context),
                (_, source, context) => tracing::trace!(message = %message, source = ?source, context = ?context),
            }
        }
    }
    .into()
}
