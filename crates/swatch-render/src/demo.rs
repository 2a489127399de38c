//! The component showcase page.

use crate::attrs::InputType;
use crate::components::{
    card, card_action, card_content, card_description, card_footer, card_header, card_title,
    Button, ButtonSize, ButtonVariant, Container, Input, Label, Tabs, TabsContent, TabsList,
    TabsTrigger,
};
use crate::markup::{Element, Node};

/// Page title used for the full document.
pub const DEMO_TITLE: &str = "UI Components Demo";

/// Initial tab selections for the two tab groups on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Selected panel of the settings tabs (`account`, `password`, `settings`).
    pub account_tab: String,
    /// Selected panel of the registration form (`personal`, `contact`).
    pub registration_tab: String,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            account_tab: "account".to_string(),
            registration_tab: "personal".to_string(),
        }
    }
}

/// Builds the showcase page body.
pub fn demo_page(options: &DemoOptions) -> Element {
    Element::new("div")
        .class("min-h-screen bg-background py-8")
        .child(
            Element::new("div")
                .class("container mx-auto space-y-8 px-4 sm:px-6 lg:px-8")
                .child(
                    Element::new("div")
                        .class("space-y-2")
                        .child(Element::new("h1").class("text-slate-800").text(DEMO_TITLE))
                        .child(
                            Element::new("p")
                                .class("text-slate-600")
                                .text("A showcase of all available UI components in this project"),
                        ),
                )
                .child(button_section())
                .child(input_section())
                .child(card_section())
                .child(tabs_section(&options.account_tab))
                .child(combined_section(&options.registration_tab)),
        )
}

fn section(title: &str, description: &str, content: impl Into<Node>) -> Element {
    Element::new("section")
        .class("space-y-4")
        .child(
            Element::new("div")
                .child(Element::new("h2").class("text-slate-800").text(title))
                .child(Element::new("p").class("text-slate-600").text(description)),
        )
        .child(content)
}

fn titled_card(title: &str, description: &str) -> Container {
    card_header()
        .child(card_title(title))
        .child(card_description(description))
}

fn field(id: &str, label: &str, input: Input) -> Element {
    Element::new("div")
        .class("space-y-2")
        .child(Label::new(label).html_for(id))
        .child(input.id(id))
}

fn row(class: &str, buttons: impl IntoIterator<Item = Button>) -> Element {
    Element::new("div").class(class).children(buttons)
}

fn button_section() -> Element {
    let variants = [
        (ButtonVariant::Default, "Default"),
        (ButtonVariant::Destructive, "Destructive"),
        (ButtonVariant::Outline, "Outline"),
        (ButtonVariant::Secondary, "Secondary"),
        (ButtonVariant::Ghost, "Ghost"),
        (ButtonVariant::Link, "Link"),
    ];
    let sizes = [
        (ButtonSize::Sm, "Small"),
        (ButtonSize::Default, "Default"),
        (ButtonSize::Lg, "Large"),
        (ButtonSize::Icon, "🎨"),
        (ButtonSize::IconSm, "📝"),
        (ButtonSize::IconLg, "🚀"),
    ];

    let content = card_content()
        .class("space-y-4")
        .child(row(
            "flex flex-wrap gap-2",
            variants.map(|(variant, label)| Button::new().variant(variant).text(label)),
        ))
        .child(
            Element::new("div")
                .class("space-y-2")
                .child(
                    Element::new("h3")
                        .class("text-sm font-medium text-slate-600")
                        .text("Button Sizes"),
                )
                .child(row(
                    "flex flex-wrap items-center gap-2",
                    sizes.map(|(size, label)| Button::new().size(size).text(label)),
                )),
        )
        .child(
            Element::new("div")
                .class("space-y-2")
                .child(
                    Element::new("h3")
                        .class("text-sm font-medium text-slate-600")
                        .text("Button States"),
                )
                .child(row(
                    "flex flex-wrap gap-2",
                    [
                        Button::new().text("Normal"),
                        Button::new().disabled(true).text("Disabled"),
                    ],
                )),
        );

    section(
        "Button",
        "Displays a button with various variants and sizes",
        card()
            .child(titled_card("Button Variants", "Different button styles available"))
            .child(content),
    )
}

fn input_section() -> Element {
    let content = card_content()
        .class("space-y-6")
        .child(field(
            "email",
            "Email",
            Input::new()
                .input_type(InputType::Email)
                .placeholder("Enter your email"),
        ))
        .child(field(
            "password",
            "Password",
            Input::new()
                .input_type(InputType::Password)
                .placeholder("Enter your password"),
        ))
        .child(field(
            "disabled",
            "Disabled Input",
            Input::new()
                .input_type(InputType::Text)
                .placeholder("Disabled")
                .disabled(true),
        ))
        .child(field("file", "File Upload", Input::new().input_type(InputType::File)));

    section(
        "Input & Label",
        "Form input elements with labels",
        card()
            .child(titled_card("Input Examples", "Various input field configurations"))
            .child(content),
    )
}

fn paragraph(text: &str) -> Element {
    Element::new("p").class("text-sm").text(text)
}

fn card_section() -> Element {
    let simple = card()
        .child(titled_card("Simple Card", "A basic card with title and description"))
        .child(card_content().child(paragraph(
            "This is the content area of the card. You can put any content here.",
        )));

    let with_action = card()
        .child(
            titled_card("Card with Action", "Card with an action button in header").child(
                card_action().child(
                    Button::new()
                        .size(ButtonSize::Sm)
                        .variant(ButtonVariant::Outline)
                        .text("Edit"),
                ),
            ),
        )
        .child(card_content().child(paragraph(
            "The action button is positioned in the header area.",
        )));

    let with_footer = card()
        .child(
            titled_card("Card with Footer", "Includes a footer section")
                .class("border-b border-slate-200"),
        )
        .child(card_content().child(paragraph(
            "Main content goes here. The footer is separated below.",
        )))
        .child(
            card_footer()
                .class("border-t border-slate-200 justify-between")
                .child(Button::new().variant(ButtonVariant::Ghost).text("Cancel"))
                .child(Button::new().text("Save")),
        );

    let complete = card()
        .child(
            titled_card("Complete Card", "All card features combined").child(
                card_action().child(
                    Button::new()
                        .size(ButtonSize::IconSm)
                        .variant(ButtonVariant::Ghost)
                        .text("⋯"),
                ),
            ),
        )
        .child(card_content().child(field(
            "card-input",
            "Name",
            Input::new().placeholder("Enter name"),
        )))
        .child(
            card_footer()
                .class("border-t border-slate-200")
                .child(Button::new().class("w-full").text("Submit")),
        );

    section(
        "Card",
        "Container component with header, content, and footer sections",
        Element::new("div")
            .class("grid gap-4 md:grid-cols-2")
            .child(simple)
            .child(with_action)
            .child(with_footer)
            .child(complete),
    )
}

fn tabs_section(selected: &str) -> Element {
    let tabs = Tabs::new("account")
        .id("account-tabs")
        .list(
            TabsList::new()
                .trigger(TabsTrigger::new("account", "Account"))
                .trigger(TabsTrigger::new("password", "Password"))
                .trigger(TabsTrigger::new("settings", "Settings")),
        )
        .panel(
            TabsContent::new("account")
                .class("mt-4 space-y-4")
                .child(field("username", "Username", Input::new().placeholder("Enter username")))
                .child(field("bio", "Bio", Input::new().placeholder("Tell us about yourself")))
                .child(Button::new().text("Update Account")),
        )
        .panel(
            TabsContent::new("password")
                .class("mt-4 space-y-4")
                .child(field(
                    "current",
                    "Current Password",
                    Input::new().input_type(InputType::Password),
                ))
                .child(field(
                    "new",
                    "New Password",
                    Input::new().input_type(InputType::Password),
                ))
                .child(Button::new().text("Change Password")),
        )
        .panel(
            TabsContent::new("settings")
                .class("mt-4 space-y-4")
                .child(field(
                    "notifications",
                    "Email Notifications",
                    Input::new()
                        .input_type(InputType::Email)
                        .placeholder("notifications@example.com"),
                ))
                .child(row(
                    "flex items-center gap-2",
                    [
                        Button::new().variant(ButtonVariant::Outline).text("Cancel"),
                        Button::new().text("Save Settings"),
                    ],
                )),
        )
        .selected(selected);

    section(
        "Tabs",
        "Organize content into separate views with tab navigation",
        card()
            .child(titled_card("Tabs Example", "Switch between different tab panels"))
            .child(card_content().child(tabs)),
    )
}

fn combined_section(selected: &str) -> Element {
    let tabs = Tabs::new("personal")
        .id("registration-tabs")
        .list(
            TabsList::new()
                .class("w-full")
                .trigger(TabsTrigger::new("personal", "Personal Info").class("flex-1"))
                .trigger(TabsTrigger::new("contact", "Contact").class("flex-1")),
        )
        .panel(
            TabsContent::new("personal")
                .class("mt-4 space-y-4")
                .child(
                    Element::new("div")
                        .class("grid gap-4 md:grid-cols-2")
                        .child(field("firstname", "First Name", Input::new().placeholder("John")))
                        .child(field("lastname", "Last Name", Input::new().placeholder("Doe"))),
                )
                .child(field(
                    "dob",
                    "Date of Birth",
                    Input::new().input_type(InputType::Date),
                )),
        )
        .panel(
            TabsContent::new("contact")
                .class("mt-4 space-y-4")
                .child(field(
                    "reg-email",
                    "Email",
                    Input::new()
                        .input_type(InputType::Email)
                        .placeholder("john.doe@example.com"),
                ))
                .child(field(
                    "phone",
                    "Phone",
                    Input::new()
                        .input_type(InputType::Tel)
                        .placeholder("+1 (555) 123-4567"),
                )),
        )
        .selected(selected);

    section(
        "Combined Example",
        "A practical example using multiple components together",
        card()
            .child(titled_card("User Registration Form", "Complete form using all components"))
            .child(card_content().child(tabs))
            .child(
                card_footer()
                    .class("border-t border-slate-200 justify-between")
                    .child(Button::new().variant(ButtonVariant::Outline).text("Reset"))
                    .child(row(
                        "flex gap-2",
                        [
                            Button::new().variant(ButtonVariant::Ghost).text("Cancel"),
                            Button::new().text("Register"),
                        ],
                    )),
            ),
    )
}
