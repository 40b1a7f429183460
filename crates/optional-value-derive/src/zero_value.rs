//! `ZeroValue` derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{format_ident, quote, quote_spanned};
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Field, Fields, Generics, Member, Path, Variant,
    parse_quote, spanned::Spanned,
};

struct ContainerAttrs {
    cr: Option<Path>,
}

impl ContainerAttrs {
    fn new(attrs: &[Attribute]) -> syn::Result<Self> {
        let zero_attrs = attrs
            .iter()
            .filter(|attr| attr.path().is_ident("zero_value"));

        let mut cr = None;
        for attr in zero_attrs {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    cr = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("Unsupported attribute; only `crate` is supported"))
                }
            })?;
        }
        Ok(Self { cr })
    }
}

struct ZeroField {
    member: Member,
    span: Span,
    skip: bool,
}

impl ZeroField {
    fn new(index: usize, raw: &Field) -> syn::Result<Self> {
        let member = match &raw.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };

        let mut skip = false;
        let zero_attrs = raw
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("zero_value"));
        for attr in zero_attrs {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("Unsupported attribute; only `skip` is supported"))
                }
            })?;
        }

        Ok(Self {
            member,
            span: raw.span(),
            skip,
        })
    }

    fn from_fields(fields: &Fields) -> syn::Result<Vec<Self>> {
        fields
            .iter()
            .enumerate()
            .map(|(i, field)| Self::new(i, field))
            .collect()
    }

    /// Binding used when destructuring an enum variant.
    fn binding(&self) -> Ident {
        match &self.member {
            Member::Named(ident) => format_ident!("__{}", ident),
            Member::Unnamed(index) => format_ident!("__field{}", index.index),
        }
    }
}

/// Conjunction of zero checks; `true` if there are no checks.
fn all_zero(checks: impl Iterator<Item = proc_macro2::TokenStream>) -> proc_macro2::TokenStream {
    checks
        .reduce(|acc, check| quote!(#acc && #check))
        .unwrap_or_else(|| quote!(true))
}

struct ZeroVariant {
    name: Ident,
    fields: Vec<ZeroField>,
}

impl ZeroVariant {
    fn is_marked(raw: &Variant) -> syn::Result<bool> {
        let zero_attrs = raw
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("zero_value"));

        let mut zero = false;
        for attr in zero_attrs {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("zero") {
                    zero = true;
                    Ok(())
                } else {
                    Err(meta.error("Unsupported attribute; only `zero` is supported on variants"))
                }
            })?;
        }
        Ok(zero)
    }

    fn find(name: &Ident, data: &DataEnum) -> syn::Result<Self> {
        let mut marked = None::<&Variant>;
        for variant in &data.variants {
            if !Self::is_marked(variant)? {
                continue;
            }
            if marked.is_some() {
                let message = "at most one variant can be marked with #[zero_value(zero)]";
                return Err(syn::Error::new(variant.ident.span(), message));
            }
            marked = Some(variant);
        }

        let Some(variant) = marked else {
            let message = "enums must mark their zero variant with #[zero_value(zero)]";
            return Err(syn::Error::new(name.span(), message));
        };
        Ok(Self {
            name: variant.ident.clone(),
            fields: ZeroField::from_fields(&variant.fields)?,
        })
    }
}

enum ZeroContainerData {
    Struct(Vec<ZeroField>),
    Enum {
        zero_variant: ZeroVariant,
        variant_count: usize,
    },
}

struct ZeroContainer {
    attrs: ContainerAttrs,
    name: Ident,
    generics: Generics,
    data: ZeroContainerData,
}

impl ZeroContainer {
    fn new(raw: &DeriveInput) -> syn::Result<Self> {
        let attrs = ContainerAttrs::new(&raw.attrs)?;
        let data = match &raw.data {
            Data::Struct(data) => ZeroContainerData::Struct(ZeroField::from_fields(&data.fields)?),
            Data::Enum(data) => ZeroContainerData::Enum {
                zero_variant: ZeroVariant::find(&raw.ident, data)?,
                variant_count: data.variants.len(),
            },
            Data::Union(_) => {
                let message = "#[derive(ZeroValue)] can only be placed on structs and enums";
                return Err(syn::Error::new(raw.ident.span(), message));
            }
        };

        Ok(Self {
            attrs,
            name: raw.ident.clone(),
            generics: raw.generics.clone(),
            data,
        })
    }

    fn cr(&self) -> proc_macro2::TokenStream {
        if let Some(cr) = &self.attrs.cr {
            quote!(#cr)
        } else {
            let name = &self.name;
            quote_spanned!(name.span()=> ::optional_value)
        }
    }

    fn struct_check(
        cr: &proc_macro2::TokenStream,
        fields: &[ZeroField],
    ) -> proc_macro2::TokenStream {
        all_zero(fields.iter().filter(|field| !field.skip).map(|field| {
            let member = &field.member;
            quote_spanned!(field.span=> #cr::ZeroValue::is_zero_value(&self.#member))
        }))
    }

    fn enum_check(
        cr: &proc_macro2::TokenStream,
        zero_variant: &ZeroVariant,
        variant_count: usize,
    ) -> proc_macro2::TokenStream {
        let variant_name = &zero_variant.name;
        let checked_fields: Vec<_> = zero_variant
            .fields
            .iter()
            .filter(|field| !field.skip)
            .collect();
        let members = checked_fields.iter().map(|field| &field.member);
        let bindings: Vec<_> = checked_fields.iter().map(|field| field.binding()).collect();
        let check = all_zero(checked_fields.iter().zip(&bindings).map(|(field, binding)| {
            quote_spanned!(field.span=> #cr::ZeroValue::is_zero_value(#binding))
        }));

        let fallback_arm = (variant_count > 1).then(|| quote!(_ => false,));
        quote! {
            match self {
                Self::#variant_name { #(#members: #bindings,)* .. } => #check,
                #fallback_arm
            }
        }
    }

    fn derive_zero_value(&self) -> proc_macro2::TokenStream {
        let cr = self.cr();
        let name = &self.name;

        let mut generics = self.generics.clone();
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(#cr::ZeroValue));
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let check = match &self.data {
            ZeroContainerData::Struct(fields) => Self::struct_check(&cr, fields),
            ZeroContainerData::Enum {
                zero_variant,
                variant_count,
            } => Self::enum_check(&cr, zero_variant, *variant_count),
        };

        quote! {
            impl #impl_generics #cr::ZeroValue for #name #ty_generics #where_clause {
                fn is_zero_value(&self) -> bool {
                    #check
                }
            }
        }
    }
}

pub(crate) fn impl_zero_value(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse(input) {
        Ok(input) => input,
        Err(err) => return err.into_compile_error().into(),
    };
    let container = match ZeroContainer::new(&input) {
        Ok(container) => container,
        Err(err) => return err.into_compile_error().into(),
    };
    container.derive_zero_value().into()
}
