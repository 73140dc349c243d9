use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, format_ident, quote, quote_spanned};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident,
    parse::{Error as ParseError, Parse, ParseStream, Result as ParseResult},
    parse_quote,
    spanned::Spanned,
};

pub struct DeriveRead {
    ident: Ident,
    generics: Generics,
    fields: Fields,
}

impl Parse for DeriveRead {
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
                    "Read can only be derived for structs",
                ));
            }
        };
        for param in &mut generics.params {
            if let GenericParam::Type(ref mut type_param) = *param {
                type_param
                    .bounds
                    .push(parse_quote!(govchain_serialization::Read));
            }
        }
        Ok(Self {
            ident,
            generics,
            fields,
        })
    }
}

impl ToTokens for DeriveRead {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let reads = match &self.fields {
            Fields::Named(fields) => {
                let field_reads = fields.named.iter().map(|f| {
                    let ident = &f.ident;
                    let ty = &f.ty;
                    quote_spanned! {f.span() =>
                        let #ident = <#ty as govchain_serialization::Read>::read(bytes, pos)?;
                    }
                });
                let field_names = fields.named.iter().map(|f| &f.ident);
                quote! {
                    #(#field_reads)*
                    Ok(#name { #(#field_names,)* })
                }
            }
            Fields::Unnamed(fields) => {
                let idents: Vec<Ident> = (0..fields.unnamed.len())
                    .map(|i| format_ident!("field_{}", i))
                    .collect();
                let field_reads = fields.unnamed.iter().zip(idents.iter()).map(|(f, ident)| {
                    let ty = &f.ty;
                    quote_spanned! {f.span() =>
                        let #ident = <#ty as govchain_serialization::Read>::read(bytes, pos)?;
                    }
                });
                quote! {
                    #(#field_reads)*
                    Ok(#name(#(#idents,)*))
                }
            }
            Fields::Unit => quote! { Ok(#name) },
        };

        let expanded = quote! {
            #[automatically_derived]
            #[allow(unused_qualifications)]
            impl #impl_generics govchain_serialization::Read for #name #ty_generics #where_clause {
                #[inline]
                fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, govchain_serialization::ReadError> {
                    #reads
                }
            }
        };
        expanded.to_tokens(tokens);
    }
}
