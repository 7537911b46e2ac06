use super::write_text;
use crate::Result;
use crate::naming::NamingConvention;
use std::path::Path;

/// Build the structured-text listing for the renamed variables.
///
/// Each name loses its global-variable prefix and becomes one assignment,
/// `Name:=Name_fb;`. Lines are joined with `\n`, without a trailing newline.
/// When `output` is given the file is overwritten with the same text.
///
/// # Errors
///
/// Returns an error when the output file cannot be written.
pub fn create_structured_text<S: AsRef<str>>(
    names: &[S],
    naming: &NamingConvention,
    output: Option<&Path>,
) -> Result<String> {
    let text = names
        .iter()
        .map(|name| {
            let name = naming.strip_prefix(name.as_ref());
            format!("{name}:={};", naming.suffixed(name))
        })
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(path) = output {
        write_text(path, &text)?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_wires_feedback() {
        let text =
            create_structured_text(&["@GV.X", "Y"], &NamingConvention::default(), None).unwrap();
        assert_eq!(text, "X:=X_fb;\nY:=Y_fb;");
    }

    #[test]
    fn empty_list_gives_empty_text() {
        let names: [&str; 0] = [];
        let text = create_structured_text(&names, &NamingConvention::default(), None).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn custom_convention() {
        let naming = NamingConvention {
            prefix: "G.".into(),
            suffix: "_FB".into(),
        };
        let text = create_structured_text(&["G.Pump1"], &naming, None).unwrap();
        assert_eq!(text, "Pump1:=Pump1_FB;");
    }
}
