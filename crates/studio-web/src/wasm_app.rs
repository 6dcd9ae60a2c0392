use leptos::prelude::*;
use studio_protocol::ProjectType;
use wasm_bindgen::prelude::*;

use crate::backdrop::FloatingShapes;
use crate::contact::ContactSection;
use crate::ui_icons::{IconName, UiIcon};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}

const NAV_LINKS: [(&str, &str); 3] = [
    ("#services", "Services"),
    ("#work", "Work"),
    ("#contact", "Contact"),
];

struct Service {
    kind: ProjectType,
    icon: IconName,
    blurb: &'static str,
    highlights: [&'static str; 3],
}

const SERVICES: [Service; 3] = [
    Service {
        kind: ProjectType::Web,
        icon: IconName::Code,
        blurb: "Custom websites and web applications built with modern technologies. \
                Fast, responsive, and SEO optimized.",
        highlights: ["Modern Frameworks", "Performance Optimized", "SEO Ready"],
    },
    Service {
        kind: ProjectType::App,
        icon: IconName::Smartphone,
        blurb: "Native and cross-platform mobile applications that deliver seamless \
                experiences across all devices.",
        highlights: ["iOS & Android", "Cross-Platform", "App Store Ready"],
    },
    Service {
        kind: ProjectType::Consultation,
        icon: IconName::MessageSquare,
        blurb: "Strategic guidance to help you make the right technology decisions \
                for your business goals.",
        highlights: ["Tech Strategy", "Code Audits", "Architecture Planning"],
    },
];

struct Project {
    title: &'static str,
    category: ProjectType,
    summary: &'static str,
    /// `None` while the project is unreleased.
    url: Option<&'static str>,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Pocopson Veterinary Station",
        category: ProjectType::Web,
        summary: "Modern, responsive website for a local veterinary practice.",
        url: Some("https://pocopsonvetstation.dimario.dev"),
    },
    Project {
        title: "BMG",
        category: ProjectType::Web,
        summary: "Professional business website with modern design.",
        url: Some("https://bmg.dimario.dev"),
    },
    Project {
        title: "iOS App Landing Page",
        category: ProjectType::App,
        summary: "Marketing website for upcoming iOS application.",
        url: None,
    },
];

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="site">
            <FloatingShapes />
            <NavBar />
            <Hero />
            <Services />
            <Work />
            <ContactSection />
            <Footer />
        </main>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Brand />
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                        .collect_view()}
                    <a class="button pill" href="#contact">"Get in Touch"</a>
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        let name = if menu_open.get() { IconName::X } else { IconName::Menu };
                        view! { <UiIcon name=name /> }
                    }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href on:click=move |_| set_menu_open.set(false)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <a class="brand" href="#">
            <span class="brand-name">"DIMARIO"</span>
            <span class="brand-tld">".DEV"</span>
        </a>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <span class="eyebrow">"Web & App Development"</span>
                <h1>
                    <span>"DIMARIO"</span>
                    <br />
                    <span class="gradient-text">"DEVELOPMENT"</span>
                </h1>
                <p>
                    "Skip the corporate runaround. We're a private studio that delivers "
                    "high-quality websites and apps, fast and affordable, with a real person "
                    "you can actually reach."
                </p>
                <div class="tags">
                    <span>"Privately Owned"</span>
                    <span>"Fast Turnaround"</span>
                    <span>"Affordable Rates"</span>
                    <span>"Direct Communication"</span>
                </div>
                <div class="hero-actions">
                    <a class="button primary" href="#work">
                        "View Our Work"
                        <UiIcon name=IconName::ArrowRight size=16 />
                    </a>
                    <a class="button outline" href="#contact">"Start a Project"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <header class="section-header">
                <span class="eyebrow">"What We Do"</span>
                <h2>"Services"</h2>
                <p>
                    "Quality work without the agency markup. We keep overhead low so you get "
                    "professional results at rates that make sense."
                </p>
            </header>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .enumerate()
                    .map(|(index, service)| {
                        view! {
                            <article class=format!("card service {}", service.kind.code())>
                                <span class="card-index">{format!("{:02}", index + 1)}</span>
                                <UiIcon name=service.icon size=24 class="card-icon" />
                                <h3>{service.kind.label()}</h3>
                                <p>{service.blurb}</p>
                                <ul>
                                    {service
                                        .highlights
                                        .iter()
                                        .map(|item| view! { <li>{*item}</li> })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Work() -> impl IntoView {
    view! {
        <section id="work" class="section work">
            <header class="section-header">
                <span class="eyebrow">"Portfolio"</span>
                <h2>"Selected Work"</h2>
                <p>"Real projects for real clients, delivered on time and on budget."</p>
            </header>
            <div class="card-grid">
                {PROJECTS.iter().map(project_card).collect_view()}
            </div>
            <a class="talk-link" href="#contact">
                "Have a project in mind? " <span>"Let's talk"</span>
                <UiIcon name=IconName::ArrowRight size=16 />
            </a>
        </section>
    }
}

fn project_card(project: &Project) -> AnyView {
    let icon = match project.category {
        ProjectType::App => IconName::Smartphone,
        _ => IconName::Globe,
    };
    let body = view! {
        <div class="project-preview">
            <UiIcon name=icon size=28 />
        </div>
        <div class="project-body">
            <span class="project-category">{project.category.label()}</span>
            <h3>{project.title}</h3>
            <p>{project.summary}</p>
        </div>
    };
    match project.url {
        Some(url) => view! {
            <a class="card project" href=url target="_blank" rel="noopener noreferrer">
                {body}
                <span class="project-status">
                    "View Live Site"
                    <UiIcon name=IconName::ExternalLink size=16 />
                </span>
            </a>
        }
        .into_any(),
        None => view! {
            <div class="card project upcoming">
                <span class="badge">"Coming Soon"</span>
                {body}
                <span class="project-status">"In Development"</span>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 DiMario Development. All rights reserved."</p>
            <Brand />
        </footer>
    }
}

pub(crate) fn log(text: &str) {
    web_sys::console::log_1(&text.into());
}
