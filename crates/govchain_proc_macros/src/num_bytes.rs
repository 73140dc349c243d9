use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote, quote_spanned};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident, Index,
    parse::{Error as ParseError, Parse, ParseStream, Result as ParseResult},
    parse_quote,
    spanned::Spanned,
};

pub struct DeriveNumBytes {
    ident: Ident,
    generics: Generics,
    fields: Fields,
}

impl Parse for DeriveNumBytes {
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
                    "NumBytes can only be derived for structs",
                ));
            }
        };
        for param in &mut generics.params {
            if let GenericParam::Type(ref mut type_param) = *param {
                type_param
                    .bounds
                    .push(parse_quote!(govchain_serialization::NumBytes));
            }
        }
        Ok(Self {
            ident,
            generics,
            fields,
        })
    }
}

impl ToTokens for DeriveNumBytes {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let call_site = Span::call_site();
        let counts: Vec<TokenStream> = match &self.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .map(|f| {
                    let field = &f.ident;
                    let access = quote_spanned!(call_site => self.#field);
                    quote_spanned! { f.span() =>
                        count += govchain_serialization::NumBytes::num_bytes(&#access);
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
                        count += govchain_serialization::NumBytes::num_bytes(&#access);
                    }
                })
                .collect(),
            Fields::Unit => Vec::new(),
        };

        let expanded = quote! {
            #[automatically_derived]
            #[allow(unused_qualifications)]
            impl #impl_generics govchain_serialization::NumBytes for #name #ty_generics #where_clause {
                #[inline]
                fn num_bytes(&self) -> usize {
                    #[allow(unused_mut)]
                    let mut count = 0;
                    #(#counts)*
                    count
                }
            }
        };
        expanded.to_tokens(tokens);
    }
}
