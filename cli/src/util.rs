/// Builds a clap value parser that accepts exactly the strum variant names of
/// an enum and parses the selected one.
#[macro_export]
macro_rules! clap_enum_variants {
    ($e: ty) => {{
        use clap::builder::TypedValueParser;
        use strum::VariantNames;
        clap::builder::PossibleValuesParser::new(<$e>::VARIANTS)
            .map(|s| s.parse::<$e>().unwrap())
    }};
}
