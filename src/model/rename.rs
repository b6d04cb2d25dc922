use text_size::TextRange;

use crate::parser::{SyntaxKind, Token, tokenize};

/// Rewrite the structural occurrences of module name `old` to `new`.
///
/// Touches `module OLD` (including `extern module OLD` prototypes) and the
/// end label `endmodule : OLD`. The match on `old` ignores case; whitespace
/// and comments between the tokens are kept as written. Other uses of the
/// name, such as recursive instantiations, are left alone.
pub fn rename_module_text(text: &str, old: &str, new: &str) -> String {
    let tokens = tokenize(text);
    let significant: Vec<&Token<'_>> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
    let is_old = |t: Option<&&Token<'_>>| {
        t.is_some_and(|t| t.kind == SyntaxKind::IDENT && t.text.eq_ignore_ascii_case(old))
    };

    let mut edits: Vec<TextRange> = Vec::new();
    for (i, token) in significant.iter().enumerate() {
        match token.kind {
            SyntaxKind::MODULE_KW if is_old(significant.get(i + 1)) => {
                edits.push(significant[i + 1].range());
            }
            SyntaxKind::ENDMODULE_KW
                if significant.get(i + 1).map(|t| t.kind) == Some(SyntaxKind::COLON)
                    && is_old(significant.get(i + 2)) =>
            {
                edits.push(significant[i + 2].range());
            }
            _ => {}
        }
    }

    let mut out = String::with_capacity(text.len() + edits.len() * new.len());
    let mut last = 0;
    for range in edits {
        out.push_str(&text[last..usize::from(range.start())]);
        out.push_str(new);
        last = usize::from(range.end());
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_end_label() {
        let text = "module Old (input a);\nendmodule : Old\n";
        assert_eq!(
            rename_module_text(text, "Old", "New"),
            "module New (input a);\nendmodule : New\n"
        );
    }

    #[test]
    fn test_case_insensitive_and_whitespace_tolerant() {
        let text = "MODULE\n  old // name\n();\nENDMODULE:OLD";
        assert_eq!(
            rename_module_text(text, "Old", "fresh"),
            "MODULE\n  fresh // name\n();\nENDMODULE:fresh"
        );
    }

    #[test]
    fn test_other_occurrences_untouched() {
        let text = "// module Old\nmodule Old(); Old u0(); endmodule";
        assert_eq!(
            rename_module_text(text, "Old", "New"),
            "// module Old\nmodule New(); Old u0(); endmodule"
        );
    }

    #[test]
    fn test_extern_prototype() {
        let text = "extern module Old(input a);\nmodule Old(.*); endmodule";
        assert_eq!(
            rename_module_text(text, "Old", "New"),
            "extern module New(input a);\nmodule New(.*); endmodule"
        );
    }
}
