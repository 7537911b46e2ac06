use super::write_text;
use crate::Result;
use crate::lookup::DatatypeLookup;
use crate::naming::NamingConvention;
use std::path::Path;

/// Build the variable declaration sheet for the renamed variables.
///
/// Each name loses its global-variable prefix, its datatype is looked up by
/// that stripped name, and the line `Name_fb,DATATYPE` is emitted, with
/// `NOT FOUND` standing in for an unknown datatype. Lines are joined with
/// `\n`. When `output` is given the file is overwritten with the same text.
///
/// # Errors
///
/// Returns an error when the output file cannot be written.
pub fn create_variable_sheet<S: AsRef<str>>(
    names: &[S],
    lookup: &DatatypeLookup,
    naming: &NamingConvention,
    output: Option<&Path>,
) -> Result<String> {
    let text = names
        .iter()
        .map(|name| {
            let name = naming.strip_prefix(name.as_ref());
            format!(
                "{},{}",
                naming.suffixed(name),
                lookup.datatype_or_sentinel(name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(path) = output {
        write_text(path, &text)?;
    }
    Ok(text)
}

/// [`create_variable_sheet`] with the lookup loaded from a tab-separated file
///
/// # Errors
///
/// Returns an error when the lookup cannot be read or the output cannot be
/// written.
pub fn variable_sheet_from_path<S: AsRef<str>, P: AsRef<Path>>(
    names: &[S],
    lookup_path: P,
    naming: &NamingConvention,
    output: Option<&Path>,
) -> Result<String> {
    let lookup = DatatypeLookup::load(lookup_path)?;
    create_variable_sheet(names, &lookup, naming, output)
}
