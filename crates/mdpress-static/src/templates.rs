//! Fixed document shell wrapped around rendered content.

use minijinja::{context, Environment};

/// Page shell using minijinja.
///
/// Every output document shares the same structure: a head block carrying the
/// title and two stylesheet links resolved through the relative prefix, and a
/// body wrapping the rendered fragment.
pub struct PageShell {
    env: Environment<'static>,
}

impl PageShell {
    /// Create a new shell with the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Compose a full document from a title, the relative prefix to the
    /// output root, and a rendered content fragment (included verbatim).
    pub fn render(
        &self,
        title: &str,
        rel_prefix: &str,
        content: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => title,
            rel_prefix => rel_prefix,
            content => content,
        })
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>
  <link rel="stylesheet" href="{{ rel_prefix | safe }}assets/css/style.css">
  <link rel="stylesheet" href="{{ rel_prefix | safe }}print.css" media="print">
</head>
<body>
<main class="markdown-body">
{{ content | safe }}
</main>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_shell_with_prefix() {
        let shell = PageShell::new();

        let html = shell.render("foo", "../../", "<p>Hello world</p>").unwrap();

        assert!(html.contains("<title>foo</title>"));
        assert!(html.contains(r#"href="../../assets/css/style.css""#));
        assert!(html.contains(r#"href="../../print.css" media="print""#));
        assert!(html.contains("<p>Hello world</p>"));
    }

    #[test]
    fn renders_shell_at_output_root() {
        let shell = PageShell::new();

        let html = shell.render("index", "", "<p>Top level</p>").unwrap();

        assert!(html.contains(r#"href="assets/css/style.css""#));
        assert!(html.contains(r#"href="print.css" media="print""#));
    }

    #[test]
    fn keeps_content_fragment_verbatim() {
        let shell = PageShell::new();
        let fragment = "<table><tr><td>cell</td></tr></table>";

        let html = shell.render("tables", "../", fragment).unwrap();

        assert!(html.contains(fragment));
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let shell = PageShell::new();

        let first = shell.render("a", "../", "<p>x</p>").unwrap();
        let second = shell.render("a", "../", "<p>x</p>").unwrap();

        assert_eq!(first, second);
    }
}
