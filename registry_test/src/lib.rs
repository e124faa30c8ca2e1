use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, FnArg, Ident, ItemFn, Pat, Signature, Type};

/// Turn a function into a test, inject dependencies, and set up test logging.
///
/// Injectable dependencies are a fresh `crate::registry::Registry` and the
/// `crate::config::Config` it was built with. By default the config is
/// `Config::default()`; `#[registry_test(partial)]` selects the partial
/// submission policy and `#[registry_test(strict)]` enables every uniqueness
/// check.
#[proc_macro_attribute]
pub fn registry_test(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract the parameters to inject and reject invalid function signatures.
    let test_args = match check_sig(item_fn.sig.clone()) {
        Ok(args) => args,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the inner function so the test keeps its declared name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_inner", name);
    item_fn.sig.ident = new_name.clone();

    // Adjust the config if asked to.
    let config_adjustment = match parse_macro_input!(args as Option<Ident>) {
        None => quote! {},
        Some(arg) if arg == "partial" => quote! {
            .with_submission(crate::model::submission::SubmissionPolicy::Partial)
        },
        Some(arg) if arg == "strict" => quote! {
            .with_unique_question_ids(true)
            .with_unique_respondents(true)
        },
        Some(arg) => {
            return syn::Error::new(arg.span(), "Expected `partial` or `strict`")
                .into_compile_error()
                .into();
        }
    };

    // Rewrite the test function.
    quote! {
        #[test]
        fn #name() {
            /// The test itself.
            #item_fn

            // Run the setup.
            crate::logging::init_test_logging();
            let config = crate::config::Config::default() #config_adjustment;
            #[allow(unused_variables)]
            let registry = crate::registry::Registry::new(config.clone());

            #new_name(#(#test_args),*);
        }
    }
    .into()
}

/// Ensure the wrapped test is synchronous, extract parameters to inject, and reject unknown parameters.
fn check_sig(sig: Signature) -> Result<Vec<TokenStream2>, syn::Error> {
    if let Some(asyncness) = sig.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "Test must not be marked `async`",
        ));
    }

    let mut has_registry = false;
    let mut has_config = false;
    let mut args = vec![];

    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            if let Pat::Ident(_) = &*pat_type.pat {
                if let Type::Path(type_path) = &*pat_type.ty {
                    if let Some(type_ident) = type_path.path.get_ident() {
                        if type_ident == "Registry" {
                            if has_registry {
                                return Err(syn::Error::new(
                                    input.span(),
                                    "Test cannot accept more than one `Registry`",
                                ));
                            }
                            has_registry = true;
                            args.push(quote! { registry });
                            continue;
                        } else if type_ident == "Config" {
                            if has_config {
                                return Err(syn::Error::new(
                                    input.span(),
                                    "Test cannot accept more than one `Config`",
                                ));
                            }
                            has_config = true;
                            args.push(quote! { config.clone() });
                            continue;
                        }
                    }
                }
            }
        }

        return Err(syn::Error::new(
            input.span(),
            "Expected one of `registry_ident: Registry` or `config_ident: Config`",
        ));
    }

    Ok(args)
}
