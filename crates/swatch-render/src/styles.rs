//! Built-in variant tables for every component.
//!
//! The registry is built once on first use and shared read-only for the life
//! of the process. Callers that want different styling layer a stylesheet on
//! a clone of it (see [`VariantRegistry::extend`]).

use once_cell::sync::Lazy;
use swatch_variants::{VariantAxis, VariantRegistry, VariantTable};
use tracing::debug;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
    rounded-lg px-4 py-3 text-sm font-bold transition-colors \
    disabled:pointer-events-none disabled:opacity-50 \
    [&_svg]:pointer-events-none [&_svg]:shrink-0 [&_svg:not([class*='size-'])]:size-5 \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 \
    focus-visible:ring-offset-background";

const BUTTON_PRIMARY: &str = "bg-primary text-primary-foreground shadow-lg \
    hover:bg-primary-dark hover:shadow-xl focus-visible:ring-primary-focus";

const INPUT_BASE: &str = "w-full min-w-0 rounded-md border border-slate-300 bg-white px-3 py-2 \
    text-sm text-slate-800 shadow-xs transition-[border,box-shadow] placeholder:text-slate-400 \
    selection:bg-primary-light selection:text-primary-foreground file:inline-flex file:h-9 \
    file:items-center file:rounded-md file:border-0 file:bg-primary-lightest file:px-3 \
    file:text-sm file:font-medium file:text-primary";

const INPUT_FOCUS: &str = "focus:border-primary-focus focus:outline-none focus:ring-2 \
    focus:ring-primary-focus focus:ring-offset-0";

const INPUT_STATE: &str = "disabled:cursor-not-allowed disabled:bg-slate-100 \
    disabled:text-slate-400 aria-invalid:border-red-500 aria-invalid:focus:ring-red-300";

fn button() -> VariantTable {
    VariantTable::new(BUTTON_BASE)
        .axis(
            VariantAxis::new("variant")
                .value("default", BUTTON_PRIMARY)
                .value("primary", BUTTON_PRIMARY)
                .value(
                    "secondary",
                    "bg-secondary text-secondary-foreground border border-slate-200 shadow-sm \
                     hover:border-primary-medium hover:text-primary focus-visible:ring-primary-focus",
                )
                .value(
                    "outline",
                    "bg-white text-slate-700 border border-slate-200 shadow-sm \
                     hover:border-primary-medium hover:text-primary focus-visible:ring-primary-focus",
                )
                .value(
                    "ghost",
                    "bg-transparent text-slate-600 hover:bg-primary-lightest hover:text-primary \
                     focus-visible:ring-primary-focus",
                )
                .value(
                    "text",
                    "bg-transparent px-0 py-0 text-primary font-medium hover:text-primary-dark \
                     focus-visible:ring-0 focus-visible:ring-offset-0",
                )
                .value(
                    "link",
                    "bg-transparent px-0 py-0 text-primary font-medium underline-offset-4 \
                     hover:text-primary-dark hover:underline focus-visible:ring-0 \
                     focus-visible:ring-offset-0",
                )
                .value(
                    "destructive",
                    "bg-destructive text-destructive-foreground shadow-sm hover:bg-[#b91c1c] \
                     focus-visible:ring-red-300",
                )
                .default_value("default"),
        )
        .axis(
            VariantAxis::new("size")
                .value("default", "px-4 py-3")
                .value("sm", "px-3 py-2 text-sm")
                .value("lg", "px-6 py-3.5 text-base")
                .value("icon", "size-10 px-0 py-0")
                .value("icon-sm", "size-9 px-0 py-0")
                .value("icon-lg", "size-12 px-0 py-0")
                .default_value("default"),
        )
}

// Inputs have no axes; disabled and invalid looks come from native
// attributes through the `disabled:` and `aria-invalid:` utilities.
fn input() -> VariantTable {
    VariantTable::from_tokens(
        [INPUT_BASE, INPUT_FOCUS, INPUT_STATE]
            .into_iter()
            .flat_map(str::split_whitespace),
    )
}

fn build() -> VariantRegistry {
    let registry = VariantRegistry::new()
        .with("button", button())
        .with("input", input())
        .with(
            "label",
            VariantTable::new(
                "flex items-center gap-2 text-sm leading-none font-medium text-slate-700 \
                 select-none group-data-[disabled=true]:pointer-events-none \
                 group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed \
                 peer-disabled:opacity-50",
            ),
        )
        .with(
            "card",
            VariantTable::new(
                "flex flex-col gap-6 rounded-xl border border-slate-200 bg-white py-6 \
                 text-slate-800 shadow-sm",
            ),
        )
        .with(
            "card-header",
            VariantTable::new(
                "@container/card-header grid auto-rows-min grid-rows-[auto_auto] items-start \
                 gap-1.5 px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto] [.border-b]:pb-6",
            ),
        )
        .with("card-title", VariantTable::new("leading-none font-semibold"))
        .with("card-description", VariantTable::new("text-sm text-slate-500"))
        .with(
            "card-action",
            VariantTable::new("col-start-2 row-span-2 row-start-1 self-start justify-self-end"),
        )
        .with("card-content", VariantTable::new("px-6"))
        .with("card-footer", VariantTable::new("flex items-center px-6 [.border-t]:pt-6"))
        .with("tabs", VariantTable::new("flex flex-col gap-2"))
        .with(
            "tabs-list",
            VariantTable::new(
                "inline-flex h-9 w-fit items-center justify-center rounded-lg bg-slate-100 \
                 p-[3px] text-slate-500",
            ),
        )
        .with(
            "tabs-trigger",
            VariantTable::new(
                "inline-flex h-[calc(100%-1px)] flex-1 items-center justify-center gap-1.5 \
                 rounded-md border border-transparent px-2 py-1 text-sm font-medium \
                 whitespace-nowrap transition-[color,box-shadow] focus-visible:ring-[3px] \
                 focus-visible:outline-1 disabled:pointer-events-none disabled:opacity-50 \
                 data-[state=active]:bg-white data-[state=active]:text-slate-800 \
                 data-[state=active]:shadow-sm",
            ),
        )
        .with("tabs-content", VariantTable::new("flex-1 outline-none"));

    debug!(components = registry.len(), "built-in styles ready");
    registry
}

static BUILTIN: Lazy<VariantRegistry> = Lazy::new(build);

/// The built-in component tables.
pub fn builtin_styles() -> &'static VariantRegistry {
    &BUILTIN
}
