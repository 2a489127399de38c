use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use swatch_render::{demo_page, DemoOptions, Node, Renderer, DEMO_TITLE};
use swatch_variants::{Selection, VariantRegistry};
use tracing::{debug, info};

use crate::cli::{RenderArgs, ResolveArgs, StylesheetArg};
use crate::config::load_styles;

const LIST_TEMPLATE: &str = include_str!("../templates/list.txt");

pub fn render(args: &RenderArgs) -> Result<()> {
    let renderer = Renderer::new(load_styles(args.styles.stylesheet.as_deref())?)
        .context("invalid styles")?;
    let options = DemoOptions {
        account_tab: args.account_tab.clone(),
        registration_tab: args.registration_tab.clone(),
    };
    let page = Node::from(demo_page(&options));

    let html = if args.fragment {
        renderer.render_node(&page)?
    } else {
        renderer.render_document(DEMO_TITLE, &page)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote showcase");
        }
        None => emit(&html)?,
    }
    Ok(())
}

pub fn resolve(args: &ResolveArgs) -> Result<()> {
    let styles = load_styles(args.styles.stylesheet.as_deref())?;
    let mut selection = Selection::new();
    for (axis, value) in &args.selections {
        selection.insert(axis.clone(), value.clone());
    }
    debug!(component = %args.component, ?selection, "resolving");

    let class = styles.resolve(&args.component, &selection, &args.class)?;
    emit(&class)
}

pub fn list(args: &StylesheetArg) -> Result<()> {
    let styles = load_styles(args.stylesheet.as_deref())?;
    emit(&list_text(styles)?)
}

#[derive(Debug, Serialize)]
struct ComponentRow<'a> {
    name: &'a str,
    base: String,
    axes: Vec<AxisRow<'a>>,
}

#[derive(Debug, Serialize)]
struct AxisRow<'a> {
    name: &'a str,
    default: Option<&'a str>,
    values: Vec<&'a str>,
}

fn component_rows(styles: &VariantRegistry) -> Result<Vec<ComponentRow<'_>>> {
    styles
        .names()
        .into_iter()
        .map(|name| {
            let table = styles.get(name)?;
            Ok(ComponentRow {
                name,
                base: table.base().join(" "),
                axes: table
                    .axes()
                    .iter()
                    .map(|axis| AxisRow {
                        name: axis.name(),
                        default: axis.default(),
                        values: axis.values().collect(),
                    })
                    .collect(),
            })
        })
        .collect()
}

fn list_text(styles: VariantRegistry) -> Result<String> {
    let mut renderer = Renderer::new(styles).context("invalid styles")?;
    renderer.add_template("list.txt", LIST_TEMPLATE)?;
    let components = component_rows(renderer.styles())?;
    Ok(renderer.render("list.txt", &serde_json::json!({ "components": components }))?)
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").context("failed to write to stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_variants::{VariantAxis, VariantTable};

    #[test]
    fn test_list_text() {
        let styles = VariantRegistry::new()
            .with("card", VariantTable::new("rounded border"))
            .with(
                "button",
                VariantTable::new("btn").axis(
                    VariantAxis::new("variant")
                        .value("default", "bg-a")
                        .value("ghost", "bg-none")
                        .default_value("default"),
                ),
            );

        assert_eq!(
            list_text(styles).unwrap(),
            "button\n  base: btn\n  variant (default: default): default, ghost\n\
             card\n  base: rounded border\n"
        );
    }

    #[test]
    fn test_list_builtin_includes_every_component() {
        let text = list_text(load_styles(None).unwrap()).unwrap();
        assert!(text.contains("\n  size (default: default): default, sm, lg, icon, icon-sm, icon-lg\n"));
        assert!(text.contains("tabs-trigger\n"));
    }
}
