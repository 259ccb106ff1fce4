mod log;
mod loggable;

use proc_macro::TokenStream;

/// Emits a `loggable!`/`traceable!` value at the level it declares.
///
/// `log!(value)` logs the message and, when the value has an error source,
/// the source chain. `log!(value, context)` additionally records `context`
/// with its `Debug` representation.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}
