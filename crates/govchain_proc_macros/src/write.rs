use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote, quote_spanned};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident, Index,
    parse::{Error as ParseError, Parse, ParseStream, Result as ParseResult},
    parse_quote,
    spanned::Spanned,
};

pub struct DeriveWrite {
    ident: Ident,
    generics: Generics,
    fields: Fields,
}

impl Parse for DeriveWrite {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let DeriveInput {
            ident,
            mut generics,
            data,
            ..
        } = input.parse()?;
        let fields = match data {
            Data::Struct(data) => data.fields,
            _ => {
                return Err(ParseError::new(
                    Span::call_site(),
                    "Write can only be derived for structs",
                ));
            }
        };
        for param in &mut generics.params {
            if let GenericParam::Type(ref mut type_param) = *param {
                type_param
                    .bounds
                    .push(parse_quote!(govchain_serialization::Write));
            }
        }
        Ok(Self {
            ident,
            generics,
            fields,
        })
    }
}

impl ToTokens for DeriveWrite {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let call_site = Span::call_site();
        let writes: Vec<TokenStream> = match &self.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .map(|f| {
                    let field = &f.ident;
                    let access = quote_spanned!(call_site => self.#field);
                    quote_spanned! { f.span() =>
                        govchain_serialization::Write::write(&#access, bytes, pos)?;
                    }
                })
                .collect(),
            Fields::Unnamed(fields) => fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let index = Index {
                        index: i as u32,
                        span: call_site,
                    };
                    let access = quote_spanned!(call_site => self.#index);
                    quote_spanned! { f.span() =>
                        govchain_serialization::Write::write(&#access, bytes, pos)?;
                    }
                })
                .collect(),
            Fields::Unit => Vec::new(),
        };

        let expanded = quote! {
            #[automatically_derived]
            #[allow(unused_qualifications)]
            impl #impl_generics govchain_serialization::Write for #name #ty_generics #where_clause {
                #[inline]
                fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), govchain_serialization::WriteError> {
                    #(#writes)*
                    Ok(())
                }
            }
        };
        expanded.to_tokens(tokens);
    }
}
