use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Menu,
    X,
    Check,
    AlertTriangle,
    ArrowRight,
    ExternalLink,
    Code,
    Smartphone,
    MessageSquare,
    Globe,
    Mail,
}

fn icon_svg_body(name: IconName) -> &'static str {
    match name {
        IconName::Menu => {
            r#"<path d="M4 12h16" />
<path d="M4 6h16" />
<path d="M4 18h16" />"#
        }
        IconName::X => {
            r#"<path d="M18 6 6 18" />
<path d="m6 6 12 12" />"#
        }
        IconName::Check => r#"<path d="M20 6 9 17l-5-5" />"#,
        IconName::AlertTriangle => {
            r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" />
<path d="M12 9v4" />
<path d="M12 17h.01" />"#
        }
        IconName::ArrowRight => {
            r#"<path d="M5 12h14" />
<path d="m12 5 7 7-7 7" />"#
        }
        IconName::ExternalLink => {
            r#"<path d="M15 3h6v6" />
<path d="M10 14 21 3" />
<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />"#
        }
        IconName::Code => {
            r#"<path d="m16 18 6-6-6-6" />
<path d="m8 6-6 6 6 6" />"#
        }
        IconName::Smartphone => {
            r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
<path d="M12 18h.01" />"#
        }
        IconName::MessageSquare => {
            r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />"#
        }
        IconName::Globe => {
            r#"<circle cx="12" cy="12" r="10" />
<path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
<path d="M2 12h20" />"#
        }
        IconName::Mail => {
            r#"<rect width="20" height="16" x="2" y="4" rx="2" />
<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />"#
        }
    }
}

#[component]
pub fn UiIcon(
    name: IconName,
    #[prop(default = 20)] size: u16,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let class_name = move || class.get().unwrap_or_default();
    let body = icon_svg_body(name);
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class_name
            inner_html=body
        ></svg>
    }
}
