use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct where every field is a
/// `crate::color::Component`. The model gets a positional constructor, array
/// conversions and a `Serialize` impl that writes the components as a tuple.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.is_empty() {
        return quote! {
            compile_error!("Models must have named fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = field_names.len();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    // Components are always readable from the outside.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color having this color space.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the components in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names),*]
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }

        impl ::serde::Serialize for #struct_name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeTuple;

                let mut tuple = serializer.serialize_tuple(#count)?;
                #(tuple.serialize_element(&self.#field_names)?;)*
                tuple.end()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
