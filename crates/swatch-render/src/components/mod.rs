//! Presentational components.
//!
//! Every component resolves its class string from the registry it is
//! rendered with, forwards an [`Attributes`](crate::Attributes) bag, and
//! accepts a class override that wins over its own classes.

mod button;
mod card;
mod input;
mod label;
mod tabs;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{
    card, card_action, card_content, card_description, card_footer, card_header, card_title,
    CardSlot, Container,
};
pub use input::Input;
pub use label::Label;
pub use tabs::{Tabs, TabsContent, TabsList, TabsState, TabsTrigger};

use crate::markup::Node;

macro_rules! component_nodes {
    ($($component:ty),* $(,)?) => {
        $(
            impl From<$component> for Node {
                fn from(component: $component) -> Self {
                    Node::component(component)
                }
            }
        )*
    };
}

component_nodes!(Button, Container, Input, Label, Tabs);
