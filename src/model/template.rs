//! Starting text for new modules

use crate::base::KeywordCase;

/// Replaced by the module name when a template is rendered
pub const MODULE_NAME_PLACEHOLDER: &str = "%modulename%";

fn builtin(case: KeywordCase) -> String {
    let kw = |k: &str| case.apply(k);
    format!(
        "{module} {name} (\n\
         \x20   // {input}  {wire} [7:0] a,\n\
         \x20   // {output} {wire}       y\n\
         );\n\
         \n\
         {endmodule}\n",
        module = kw("module"),
        name = MODULE_NAME_PLACEHOLDER,
        input = kw("input"),
        output = kw("output"),
        wire = kw("wire"),
        endmodule = kw("endmodule"),
    )
}

/// Render `template` (or the built-in one) for a module called `name`
pub fn render_template(template: Option<&str>, name: &str, case: KeywordCase) -> String {
    match template {
        Some(custom) => custom.replace(MODULE_NAME_PLACEHOLDER, name),
        None => builtin(case).replace(MODULE_NAME_PLACEHOLDER, name),
    }
}
