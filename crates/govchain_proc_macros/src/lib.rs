use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

mod num_bytes;
mod read;
mod write;

#[inline]
#[proc_macro_derive(Read)]
pub fn derive_read(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as read::DeriveRead);
    quote!(#item).into()
}

#[inline]
#[proc_macro_derive(Write)]
pub fn derive_write(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as write::DeriveWrite);
    quote!(#item).into()
}

#[inline]
#[proc_macro_derive(NumBytes)]
pub fn derive_num_bytes(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as num_bytes::DeriveNumBytes);
    quote!(#item).into()
}
