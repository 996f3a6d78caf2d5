//! Landing page component
//!
//! The single page of the site:
//! - SEO meta tags
//! - Hero with the typing headline, metric counters and delayed CTA buttons
//! - Service, features, process, pricing and testimonial sections that
//!   fade in on scroll
//! - Desktop nav bar, mobile bar, full-screen menu and hero drawer
//! - Consultation dialog and toast notifications
//!
//! Mounting this component is the startup hook: it provides the page
//! context and wires every page-wide listener.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::common::{ButtonVariant, CtaButton};
use crate::ui::consultation::ConsultationModal;
use crate::ui::context::{provide_page_context, use_page_context};
use crate::ui::dom::ids;
use crate::ui::effects::{HeroButtons, MetricCounter, ScrollProgressBar};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::{AnchorLink, DesktopNav, HeroNavDrawer, MobileMenu, MobileNavBar};
use crate::ui::notifications::NotificationsContainer;
use crate::ui::reveal::use_reveal_on_scroll;
use crate::ui::typing::TypingHeadline;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = provide_page_context();
    use_reveal_on_scroll();

    let open_consultation = Callback::new(move |_| ctx.open_consultation());

    view! {
        <SeoMeta />
        <LandingStyles />

        <ScrollProgressBar />
        <DesktopNav />
        <MobileNavBar />
        <MobileMenu />

        <main class="landing">
            // Hero Section
            <section id=ids::HERO class="hero">
                <HeroNavDrawer />
                <div class="hero-content">
                    <TypingHeadline />
                    <HeroActions />
                    <div class="hero-metrics">
                        <MetricCounter target=50 suffix="%" label="Lower inspection cost" />
                        <MetricCounter target=200 suffix="%" label="Detection performance" />
                        <MetricCounter target=99 suffix="%" label="Defect recall" />
                    </div>
                </div>
            </section>

            <ServiceSection />
            <FeatureSection />
            <ProcessSection />
            <PricingSection />
            <TestimonialSection />

            // Call to action
            <section id="contact" class="cta-section">
                <h2 class="section-title">"Ready to raise your inspection standard?"</h2>
                <p class="section-subtitle">
                    "Talk to an engineer about your line. The first consultation is free."
                </p>
                <CtaButton class="cta-button-large" on_click=open_consultation>
                    "Book a Consultation"
                </CtaButton>
            </section>
        </main>

        <Footer />

        <ConsultationModal />
        <NotificationsContainer notifications=ctx.notifications.notifications() />
    }
}

/// Hero call-to-action pair; both buttons open the consultation dialog
#[component]
fn HeroActions() -> impl IntoView {
    let ctx = use_page_context();
    let open_consultation = Callback::new(move |_| ctx.open_consultation());

    view! {
        <HeroButtons>
            <CtaButton class="cta-button-primary" on_click=open_consultation>
                "Request Free Consultation"
                <Icon name=icons::ARROW_RIGHT />
            </CtaButton>
            <CtaButton
                variant=ButtonVariant::Secondary
                class="cta-button-secondary"
                on_click=open_consultation
            >
                "Talk to an Engineer"
            </CtaButton>
        </HeroButtons>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="iRDA-X | AI Vision Inspection" />

        <Meta name="description" content="AI-powered vision inspection at half the usual cost. iRDA-X builds defect detection for production lines." />
        <Meta name="keywords" content="vision inspection, AI inspection, defect detection, machine vision, quality control" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="iRDA-X | AI Vision Inspection" />
        <Meta property="og:description" content="At 50% of the usual cost, experience 200% of the results." />

        <Link rel="canonical" href="https://irda-x.com/" />
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

#[component]
fn ServiceSection() -> impl IntoView {
    view! {
        <section id=ids::SERVICE class="section">
            <SectionHeader
                title="What we build"
                subtitle="Inspection models trained on your parts, deployed on your line."
            />
            <div class="card-grid">
                <InfoCard
                    class="service-card"
                    title="Surface defect detection"
                    description="Scratches, dents, stains and contamination found at line speed."
                />
                <InfoCard
                    class="service-card"
                    title="Assembly verification"
                    description="Missing, misplaced or reversed components caught before packing."
                />
                <InfoCard
                    class="service-card"
                    title="Dimensional inspection"
                    description="Sub-millimetre measurement from standard industrial cameras."
                />
            </div>
        </section>
    }
}

#[component]
fn FeatureSection() -> impl IntoView {
    view! {
        <section id="features" class="section section-alt">
            <SectionHeader
                title="Why iRDA-X"
                subtitle="Built for factories that cannot afford a research project."
            />
            <div class="card-grid">
                <InfoCard
                    class="feature-card"
                    title="Few-shot training"
                    description="Start from dozens of defect images instead of thousands."
                />
                <InfoCard
                    class="feature-card"
                    title="Edge deployment"
                    description="Runs next to the camera. No cloud round trip on the critical path."
                />
                <InfoCard
                    class="feature-card"
                    title="Explainable results"
                    description="Every rejection comes with a heat map your operators can check."
                />
                <InfoCard
                    class="feature-card"
                    title="Continuous learning"
                    description="New defect types are added without stopping the line."
                />
            </div>
        </section>
    }
}

#[component]
fn ProcessSection() -> impl IntoView {
    const STEPS: [(&str, &str, &str); 4] = [
        ("01", "Consultation", "We review your parts, defects and line constraints."),
        ("02", "Proof of concept", "A model trained on your samples, measured against your criteria."),
        ("03", "Line integration", "Cameras, lighting and PLC signals wired into production."),
        ("04", "Operation", "Monitoring and retraining as your products change."),
    ];

    view! {
        <section id="process" class="section">
            <SectionHeader
                title="How it works"
                subtitle="From first call to production in weeks, not quarters."
            />
            <div class="card-grid">
                {STEPS
                    .iter()
                    .map(|&(step, title, description)| {
                        view! {
                            <div class="process-card">
                                <span class="process-step">{step}</span>
                                <h3 class="card-title">{title}</h3>
                                <p class="card-text">{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="section section-alt">
            <SectionHeader
                title="Simple, transparent pricing"
                subtitle="Half the cost of a conventional machine vision project."
            />
            <div class="card-grid">
                <PricingCard
                    name="PoC"
                    price="Free"
                    description="Feasibility check on your own samples"
                    features=&["Sample review", "Baseline model", "Accuracy report"]
                    highlighted=false
                />
                <PricingCard
                    name="Standard"
                    price="From 30M KRW"
                    description="One inspection point, fully integrated"
                    features=&["Custom model", "Edge device", "Line integration", "12 months support"]
                    highlighted=true
                />
                <PricingCard
                    name="Enterprise"
                    price="Contact us"
                    description="Multiple lines and plants"
                    features=&["Unlimited inspection points", "On-site engineer", "Dedicated retraining"]
                    highlighted=false
                />
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
) -> impl IntoView {
    let ctx = use_page_context();
    let variant = if highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    view! {
        <div class="pricing-card" class:highlighted=highlighted>
            {highlighted.then(|| view! { <div class="pricing-badge">"Most Popular"</div> })}
            <h3 class="card-title">{name}</h3>
            <div class="pricing-price">{price}</div>
            <p class="card-text">{description}</p>
            <ul class="pricing-features">
                {features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <CtaButton
                variant=variant
                class="cta-button-small"
                on_click=Callback::new(move |_| ctx.open_consultation())
            >
                "Get a Quote"
            </CtaButton>
        </div>
    }
}

#[component]
fn TestimonialSection() -> impl IntoView {
    const QUOTES: [(&str, &str); 3] = [
        ("Our false reject rate dropped by two thirds in the first month.", "Quality manager, auto parts"),
        ("We had a working PoC on our own samples in under three weeks.", "Plant director, electronics"),
        ("The operators trust it because they can see why a part was rejected.", "Production lead, packaging"),
    ];

    view! {
        <section id="testimonials" class="section">
            <SectionHeader title="What customers say" subtitle="Results from real production lines." />
            <div class="card-grid">
                {QUOTES
                    .iter()
                    .map(|&(quote, author)| {
                        view! {
                            <blockquote class="testimonial-card">
                                <p class="card-text">{quote}</p>
                                <cite>{author}</cite>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn InfoCard(class: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            <h3 class="card-title">{title}</h3>
            <p class="card-text">{description}</p>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <div>
                    <span class="logo-mark">"iRDA"</span>
                    <span class="logo-accent">"-X"</span>
                    <p class="footer-text">"AI vision inspection for every production line."</p>
                </div>
                <div class="footer-links">
                    <AnchorLink href="#service" class="footer-link">"Service"</AnchorLink>
                    <AnchorLink href="#pricing" class="footer-link">"Pricing"</AnchorLink>
                    <a class="footer-link" href="mailto:jongsu@irda-x.com">"jongsu@irda-x.com"</a>
                </div>
            </div>
            <p class="footer-copy">"© 2025 iRDA-X. All rights reserved."</p>
        </footer>
    }
}

/// CSS for the landing page and the state classes its controllers toggle
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --primary: #1d4ed8;
                --accent: #06b6d4;
                --text: #0f172a;
                --muted: #64748b;
                --surface: #f8fafc;
                --error: #dc2626;
                --success: #16a34a;
            }
            * { box-sizing: border-box; }
            body { margin: 0; font-family: system-ui, sans-serif; color: var(--text); }

            /* Scroll progress */
            .scroll-progress {
                position: fixed; top: 0; left: 0; width: 0%; height: 3px;
                background: linear-gradient(90deg, var(--primary) 0%, var(--accent) 100%);
                z-index: 1001; transition: width 0.1s ease;
            }

            /* Navigation */
            .navbar, .mobile-navbar {
                position: fixed; top: 0; left: 0; right: 0; height: 80px; z-index: 1000;
                background-color: rgba(255, 255, 255, 0.95); backdrop-filter: blur(10px);
                transform: translateY(-100%); transition: transform 0.4s ease;
            }
            .navbar.show, .mobile-navbar.show { transform: translateY(0); }
            .nav-container { max-width: 1200px; margin: 0 auto; height: 100%; display: flex; align-items: center; justify-content: space-between; padding: 0 1.5rem; }
            .nav-links { display: flex; gap: 2rem; }
            .nav-link { color: var(--text); text-decoration: none; font-weight: 500; }
            .mobile-navbar { display: none; align-items: center; justify-content: space-between; padding: 0 1rem; height: 64px; }
            .logo { text-decoration: none; font-weight: 800; font-size: 1.5rem; }
            .logo-mark { color: var(--text); font-weight: 800; }
            .logo-accent { color: var(--primary); font-weight: 800; }
            .hamburger-button { background: none; border: 0; padding: 0.5rem; cursor: pointer; color: var(--text); }
            .hamburger-button.active { color: var(--primary); }
            .icon { width: 1.5rem; height: 1.5rem; }
            .icon-text { width: 1rem; height: 1rem; flex-shrink: 0; }

            .mobile-menu {
                position: fixed; inset: 0; z-index: 1100; background: rgba(15, 23, 42, 0.6);
                opacity: 0; pointer-events: none; transition: opacity 0.3s ease;
            }
            .mobile-menu.active { opacity: 1; pointer-events: auto; }
            .mobile-menu-content {
                position: absolute; top: 0; right: 0; bottom: 0; width: min(320px, 85vw);
                background: white; padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem;
                transform: translateX(100%); transition: transform 0.3s ease;
            }
            .mobile-menu.active .mobile-menu-content { transform: translateX(0); }
            .mobile-menu-header { display: flex; justify-content: space-between; align-items: center; }
            .mobile-menu-close { background: none; border: 0; cursor: pointer; }
            .mobile-menu-links { display: flex; flex-direction: column; gap: 1rem; }
            .mobile-nav-link { color: var(--text); text-decoration: none; font-size: 1.125rem; }

            .hero-mobile-nav { display: none; position: absolute; top: 1rem; right: 1rem; z-index: 10; }
            .mobile-nav {
                position: absolute; right: 0; top: 3rem; background: white; border-radius: 0.75rem;
                box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15); padding: 0.75rem 1rem;
                display: flex; flex-direction: column; gap: 0.5rem; min-width: 180px;
                opacity: 0; transform: translateY(-8px); pointer-events: none; transition: all 0.25s ease;
            }
            .mobile-nav.active { opacity: 1; transform: translateY(0); pointer-events: auto; }
            .mobile-nav-item { color: var(--text); text-decoration: none; }

            @media (max-width: 768px) {
                .navbar { display: none; }
                .mobile-navbar { display: flex; }
                .hero-mobile-nav { display: block; }
            }

            /* Hero */
            .hero {
                position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center;
                background: radial-gradient(circle at 30% 20%, #e0f2fe 0%, white 60%); padding: 6rem 1.5rem;
            }
            .hero-content { max-width: 900px; text-align: center; }
            .hero-title { font-size: clamp(2rem, 5vw, 3.75rem); line-height: 1.15; margin: 0 0 1.5rem; min-height: 2.4em; }
            .hero-subtitle { font-size: clamp(1.125rem, 2.5vw, 1.5rem); color: var(--muted); min-height: 2.6em; }
            .hero-title-accent, .hero-subtitle-accent { color: var(--primary); }
            .typing-text::after { content: "|"; margin-left: 2px; animation: blink 1s step-end infinite; }
            .typing-text.completed::after, .typing-text:empty::after { content: ""; }
            @keyframes blink { 50% { opacity: 0; } }

            .hero-buttons {
                display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem;
                opacity: 0; transform: translateY(30px);
            }
            .hero-buttons.loaded { transition: all 0.8s ease; opacity: 1; transform: translateY(0); }
            .hero-metrics { display: flex; justify-content: center; gap: 3rem; margin-top: 3rem; flex-wrap: wrap; }
            .metric { display: flex; flex-direction: column; align-items: center; }
            .metric-value { font-size: 2.5rem; font-weight: 800; color: var(--primary); }
            .metric-label { color: var(--muted); font-size: 0.875rem; }

            /* Buttons */
            .btn {
                display: inline-flex; align-items: center; gap: 0.5rem; border-radius: 0.75rem;
                padding: 0.875rem 1.75rem; font-weight: 600; font-size: 1rem; cursor: pointer;
                border: 2px solid transparent; transition: transform 0.15s ease, background-color 0.2s ease;
            }
            .btn.pressed { transform: scale(0.95); }
            .btn-primary { background: var(--primary); color: white; }
            .btn-secondary { background: var(--surface); color: var(--text); }
            .btn-outline { background: transparent; border-color: var(--primary); color: var(--primary); }
            .cta-button-secondary {
                display: inline-flex; align-items: center; padding: 0.875rem 1.75rem; border-radius: 0.75rem;
                border: 2px solid var(--muted); color: var(--text); text-decoration: none; font-weight: 600;
                background: transparent; cursor: pointer;
            }
            .cta-button-small { padding: 0.5rem 1.25rem; font-size: 0.875rem; }
            .cta-button-large { padding: 1.125rem 2.5rem; font-size: 1.125rem; }

            /* Sections */
            .section { padding: 6rem 1.5rem; max-width: 1200px; margin: 0 auto; }
            .section-alt { background: var(--surface); max-width: none; }
            .section-header { text-align: center; margin-bottom: 3rem; }
            .section-title { font-size: clamp(1.75rem, 3.5vw, 2.5rem); margin: 0 0 0.75rem; }
            .section-subtitle { color: var(--muted); font-size: 1.125rem; }
            .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; max-width: 1200px; margin: 0 auto; }
            .service-card, .feature-card, .pricing-card, .process-card, .testimonial-card {
                background: white; border: 1px solid #e2e8f0; border-radius: 1rem; padding: 2rem; margin: 0;
            }
            .card-title { margin: 0 0 0.5rem; font-size: 1.25rem; }
            .card-text { color: var(--muted); line-height: 1.6; margin: 0; }
            .process-step { color: var(--primary); font-weight: 800; font-size: 1.5rem; }
            .pricing-card { position: relative; display: flex; flex-direction: column; gap: 0.75rem; }
            .pricing-card.highlighted { border: 2px solid var(--primary); }
            .pricing-badge {
                position: absolute; top: -0.875rem; left: 50%; transform: translateX(-50%);
                background: var(--primary); color: white; padding: 0.25rem 1rem; border-radius: 999px; font-size: 0.75rem;
            }
            .pricing-price { font-size: 1.75rem; font-weight: 800; }
            .pricing-features { padding-left: 1.25rem; color: var(--muted); flex: 1; }
            .testimonial-card cite { display: block; margin-top: 1rem; color: var(--text); font-style: normal; font-weight: 600; }
            .cta-section { text-align: center; padding: 6rem 1.5rem; background: linear-gradient(135deg, #eff6ff 0%, #ecfeff 100%); }

            /* Reveal on scroll */
            .fade-in { opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease, transform 0.8s ease; }
            .fade-in.visible { opacity: 1; transform: translateY(0); }

            /* Footer */
            .footer { padding: 3rem 1.5rem; background: var(--text); color: #cbd5e1; }
            .footer .logo-mark { color: white; }
            .footer-content { max-width: 1200px; margin: 0 auto; display: flex; justify-content: space-between; gap: 2rem; flex-wrap: wrap; }
            .footer-links { display: flex; gap: 1.5rem; }
            .footer-link { color: #cbd5e1; text-decoration: none; }
            .footer-copy { text-align: center; font-size: 0.875rem; margin-top: 2rem; }

            /* Consultation modal */
            .modal {
                position: fixed; inset: 0; z-index: 1200; display: flex; align-items: center; justify-content: center;
                background: rgba(15, 23, 42, 0.6); padding: 1rem; opacity: 0; pointer-events: none; transition: opacity 0.3s ease;
            }
            .modal.active { opacity: 1; pointer-events: auto; }
            .modal-content {
                background: white; border-radius: 1rem; width: 100%; max-width: 640px; max-height: 90vh; overflow-y: auto;
                transform: translateY(20px); transition: transform 0.3s ease;
            }
            .modal.active .modal-content { transform: translateY(0); }
            .modal-header { display: flex; justify-content: space-between; align-items: flex-start; padding: 1.5rem 1.5rem 0; }
            .modal-title { margin: 0; font-size: 1.5rem; }
            .modal-subtitle { color: var(--muted); margin: 0.25rem 0 0; }
            .modal-close { background: none; border: 0; cursor: pointer; color: var(--muted); }
            .modal-body { padding: 1.5rem; }

            .consultation-form { display: flex; flex-direction: column; gap: 1rem; }
            .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
            @media (max-width: 640px) { .form-row { grid-template-columns: 1fr; } }
            .form-group { display: flex; flex-direction: column; gap: 0.375rem; border: 0; padding: 0; margin: 0; }
            .form-label { font-weight: 600; font-size: 0.875rem; }
            .required { color: var(--error); margin-left: 0.125rem; }
            .form-input {
                border: 1px solid #cbd5e1; border-radius: 0.5rem; padding: 0.75rem; font: inherit; width: 100%;
            }
            .form-input:focus { outline: 2px solid var(--primary); border-color: transparent; }
            .form-input.error, .checkbox-label.error { border-color: var(--error); color: var(--error); }
            .form-textarea { resize: vertical; }
            .checkbox-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
            .checkbox-label { display: flex; align-items: center; gap: 0.5rem; cursor: pointer; }
            .field-error { display: flex; align-items: center; gap: 0.375rem; color: var(--error); font-size: 0.8125rem; }
            .submit-button {
                background: var(--primary); color: white; border: 0; border-radius: 0.75rem; padding: 1rem;
                font-weight: 700; font-size: 1rem; cursor: pointer;
            }
            .submit-button:disabled { opacity: 0.6; cursor: not-allowed; }

            /* Notifications */
            .notification-stack { position: fixed; top: 20px; right: 20px; z-index: 1300; display: flex; flex-direction: column; gap: 0.5rem; }
            .notification {
                max-width: 400px; padding: 1rem 1.25rem; border-radius: 0.75rem; color: white;
                box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
                transform: translateX(120%); transition: transform 0.3s ease;
            }
            .notification.show { transform: translateX(0); }
            .notification-success { background: var(--success); }
            .notification-error { background: var(--error); }
            .notification-content { display: flex; align-items: center; gap: 0.75rem; }
            .notification-icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
            .notification-message { flex: 1; line-height: 1.4; }
            .notification-close { background: none; border: 0; color: white; font-size: 1.25rem; cursor: pointer; }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_hero_actions_render_as_buttons() {
        Owner::new().with(|| {
            provide_page_context();
            let html = view! { <HeroActions /> }.to_html();

            assert_eq!(html.matches("<button").count(), 2);
            assert!(html.contains("cta-button-primary"));
            assert!(html.contains("cta-button-secondary"));
            assert!(!html.contains("href="));
        });
    }
}
