//! Attribute parsing for `#[catalog(...)]`, `#[message(...)]` and
//! `#[fallback]`.

use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, LitInt, LitStr, Token};

/// Default number of digits a display code is zero-padded to.
const DEFAULT_WIDTH: usize = 3;

/// Enum-level `#[catalog(prefix = "NJS", width = 3)]`.
pub struct CatalogAttr {
    /// Product prefix placed before every display code.
    pub prefix: String,

    /// Zero-padding width of the numeric part of a display code.
    pub width: usize,
}

impl CatalogAttr {
    pub fn from_attributes(attrs: &[Attribute], enum_name: &Ident) -> syn::Result<Self> {
        let mut prefix: Option<LitStr> = None;
        let mut width: Option<usize> = None;
        let mut seen = false;

        for attr in attrs.iter().filter(|a| a.path().is_ident("catalog")) {
            if seen {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[catalog(...)] attribute",
                ));
            }
            seen = true;

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    if prefix.is_some() {
                        return Err(meta.error("duplicate `prefix` option"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_prefix(&lit)?;
                    prefix = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("width") {
                    if width.is_some() {
                        return Err(meta.error("duplicate `width` option"));
                    }
                    let lit: LitInt = meta.value()?.parse()?;
                    width = Some(lit.base10_parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown catalog option; expected `prefix` or `width`"))
                }
            })?;
        }

        let Some(prefix) = prefix else {
            return Err(syn::Error::new_spanned(
                enum_name,
                "missing #[catalog(prefix = \"...\")] attribute",
            ));
        };

        Ok(Self {
            prefix: prefix.value(),
            width: width.unwrap_or(DEFAULT_WIDTH),
        })
    }
}

/// A prefix is written verbatim before `-nnn: `, so it is limited to ASCII
/// letters, digits and `_`.
fn validate_prefix(lit: &LitStr) -> syn::Result<()> {
    let prefix = lit.value();

    if prefix.is_empty() {
        return Err(syn::Error::new_spanned(lit, "prefix cannot be empty"));
    }

    if let Some(bad) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(syn::Error::new_spanned(
            lit,
            format!("prefix cannot contain {bad:?}; use ASCII letters, digits or `_`"),
        ));
    }

    Ok(())
}

/// Variant-level `#[message(code = 4, "invalid value for property {property:str}")]`.
///
/// The text may also be given as `text = "..."`.
pub struct MessageAttr {
    /// Numeric part of the published display code.
    pub code: u32,

    /// The message text, kept as a literal for span information.
    pub text: LitStr,
}

#[derive(Default)]
struct RawMessageAttr {
    code: Option<LitInt>,
    text: Option<LitStr>,
}

impl Parse for RawMessageAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut raw = RawMessageAttr::default();

        while !input.is_empty() {
            if input.peek(LitStr) {
                let lit: LitStr = input.parse()?;
                raw.set_text(lit)?;
            } else {
                let key: Ident = input.parse()?;
                input.parse::<Token![=]>()?;

                match key.to_string().as_str() {
                    "code" => {
                        if raw.code.is_some() {
                            return Err(syn::Error::new_spanned(key, "duplicate `code` option"));
                        }
                        raw.code = Some(input.parse()?);
                    }
                    "text" => {
                        let lit: LitStr = input.parse()?;
                        raw.set_text(lit)?;
                    }
                    _ => {
                        return Err(syn::Error::new_spanned(
                            key,
                            "unknown message option; expected `code` or `text`",
                        ));
                    }
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(raw)
    }
}

impl RawMessageAttr {
    fn set_text(&mut self, lit: LitStr) -> syn::Result<()> {
        if self.text.is_some() {
            return Err(syn::Error::new_spanned(lit, "duplicate message text"));
        }
        self.text = Some(lit);
        Ok(())
    }
}

impl MessageAttr {
    /// Finds and parses the single `#[message(...)]` on a variant.
    pub fn from_variant(attrs: &[Attribute], variant: &Ident) -> syn::Result<Self> {
        let mut found: Option<&Attribute> = None;

        for attr in attrs.iter().filter(|a| a.path().is_ident("message")) {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[message(...)] attribute",
                ));
            }
            found = Some(attr);
        }

        let Some(attr) = found else {
            return Err(syn::Error::new_spanned(
                variant,
                "missing #[message(code = ..., \"...\")] attribute",
            ));
        };

        let raw: RawMessageAttr = attr.parse_args()?;

        let Some(code) = raw.code else {
            return Err(syn::Error::new_spanned(attr, "missing `code = ...` in #[message]"));
        };
        let Some(text) = raw.text else {
            return Err(syn::Error::new_spanned(attr, "missing message text in #[message]"));
        };

        Ok(Self {
            code: code.base10_parse()?,
            text,
        })
    }
}

/// Whether a variant carries `#[fallback]`.
pub fn is_fallback(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut fallback = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("fallback")) {
        attr.meta.require_path_only()?;
        if fallback {
            return Err(syn::Error::new_spanned(attr, "duplicate #[fallback] attribute"));
        }
        fallback = true;
    }

    Ok(fallback)
}
