//! Page rendering.
//!
//! [`PageView`] draws the [`RenderTree`] produced by
//! [`compose`](crate::core::compose). The layout is rebuilt only when the
//! active page changes; within the home page, only the contact form reacts to
//! the contact type.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::contact::ContactFormView;
use crate::components::icons as ic;
use crate::components::primitives::{
    ActionButton, Floating, HeadingText, Reveal, StatCounter, VideoCard,
};
use crate::components::ticker::SponsorTicker;
use crate::config::reveal_delays;
use crate::models::{
    AboutHeroContent, CallToActionContent, ContactType, CtaVariant, FeatureEntry,
    Heading, HeroContent, MissionContent, Page, ProfileContent, RenderTree, Section,
};

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn PageView(
    tree: Memo<RenderTree>,
    on_select_contact_type: Callback<ContactType>,
) -> impl IntoView {
    let page = Memo::new(move |_| tree.with(|t| t.page));

    move || {
        let class = match page.get() {
            Page::Home => css::home,
            Page::About => css::about,
        };
        let sections = tree.with_untracked(|t| t.sections.clone());
        let body = sections
            .into_iter()
            .map(|section| render_section(section, tree, on_select_contact_type))
            .collect_view();

        view! { <div class=class>{body}</div> }
    }
}

fn render_section(
    section: Section,
    tree: Memo<RenderTree>,
    on_select_contact_type: Callback<ContactType>,
) -> AnyView {
    let anchor = section.anchor();
    match section {
        Section::Hero(content) => view! { <HeroSection content=content /> }.into_any(),
        Section::Stats(stats) => view! {
            <section class=css::stats>
                <div class=css::statsRow>
                    {stats
                        .into_iter()
                        .map(|s| view! { <StatCounter label=s.label value=s.value /> })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
        Section::Videos { heading, cards } => view! {
            <section id=anchor class=css::section>
                <div class=css::container>
                    <SectionTitle heading=heading />
                    <div class=css::grid>
                        {cards
                            .into_iter()
                            .map(|card| view! { <VideoCard card=card /> })
                            .collect_view()}
                    </div>
                </div>
            </section>
        }
        .into_any(),
        Section::AboutBlurb(profile) => {
            let heading = profile.heading.clone();
            view! {
                <section id=anchor class=format!("{} {}", css::section, css::muted)>
                    <div class=css::container>
                        <SectionTitle heading=heading />
                        <ProfileBody profile=profile round_image=true />
                    </div>
                </section>
            }
            .into_any()
        }
        Section::Sponsors { heading, track } => view! {
            <section id=anchor class=format!("{} {}", css::section, css::warm)>
                <div class=css::container>
                    <SectionTitle heading=heading />
                    <SponsorTicker track=track />
                </div>
            </section>
        }
        .into_any(),
        Section::Features { heading, items } => view! {
            <section id=anchor class=css::section>
                <div class=css::container>
                    <SectionTitle heading=heading />
                    <FeatureGrid items=items hover=true />
                </div>
            </section>
        }
        .into_any(),
        Section::CallToAction { variant, content } => {
            view! { <CallToAction variant=variant content=content /> }.into_any()
        }
        Section::Contact { heading, form: composed } => {
            let form = Memo::new(move |_| {
                tree.with(|t| t.contact_form().cloned())
                    .unwrap_or_else(|| composed.clone())
            });
            view! {
                <section id=anchor class=css::section>
                    <div class=css::container>
                        <SectionTitle heading=heading />
                        <ContactFormView form=form on_select_contact_type=on_select_contact_type />
                    </div>
                </section>
            }
            .into_any()
        }
        Section::AboutHero(content) => view! { <AboutHero content=content /> }.into_any(),
        Section::Mission(content) => view! { <Mission content=content /> }.into_any(),
        Section::Profile(profile) => {
            let heading = profile.heading.clone();
            view! {
                <section class=css::block>
                    <SectionTitle heading=heading small=true />
                    <ProfileBody profile=profile round_image=false />
                </section>
            }
            .into_any()
        }
        Section::SecretSauce { heading, items } => view! {
            <section class=css::block>
                <SectionTitle heading=heading small=true />
                <FeatureGrid items=items hover=false />
            </section>
        }
        .into_any(),
    }
}

/// Centered section title with gold accent.
#[component]
fn SectionTitle(heading: Heading, #[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { css::titleSmall } else { css::title };
    view! {
        <h2 class=class>
            <HeadingText heading=heading />
        </h2>
    }
}

#[component]
fn HeroSection(content: HeroContent) -> impl IntoView {
    let HeroContent {
        heading,
        subtitle,
        action,
    } = content;

    view! {
        <section class=css::hero>
            <div class=css::container>
                <Reveal delay_ms=reveal_delays::TITLE offset=-50>
                    <h1 class=css::heroTitle>
                        <HeadingText heading=heading plain_accent=css::heroAccent />
                    </h1>
                </Reveal>
                <Reveal delay_ms=reveal_delays::SUBTITLE offset=50>
                    <p class=css::heroSubtitle>{subtitle}</p>
                </Reveal>
                <Reveal delay_ms=reveal_delays::ACTION offset=50>
                    <div class=css::center>
                        <ActionButton action=action class=css::heroAction />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProfileBody(profile: ProfileContent, round_image: bool) -> impl IntoView {
    let ProfileContent {
        name,
        image,
        image_alt,
        paragraphs,
        action,
        ..
    } = profile;
    let image_class = if round_image {
        css::profileImage
    } else {
        css::profileImageSmall
    };

    view! {
        <div class=css::profile>
            <div class=css::profileMedia>
                <img src=image alt=image_alt class=image_class />
            </div>
            <div class=css::profileText>
                <h3 class=css::profileName>{name}</h3>
                <Paragraphs paragraphs=paragraphs />
                {action.map(|action| view! { <ActionButton action=action class=css::outlineButton /> })}
            </div>
        </div>
    }
}

#[component]
fn Paragraphs(paragraphs: Vec<String>) -> impl IntoView {
    paragraphs
        .into_iter()
        .map(|p| view! { <p class=css::paragraph>{p}</p> })
        .collect_view()
}

#[component]
fn FeatureGrid(items: Vec<FeatureEntry>, hover: bool) -> impl IntoView {
    let card_class = if hover {
        format!("{} {}", css::featureCard, css::featureCardHover)
    } else {
        css::featureCard.to_string()
    };

    view! {
        <div class=css::grid>
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class=card_class.clone()>
                            <h3 class=css::featureTitle>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CallToAction(variant: CtaVariant, content: CallToActionContent) -> impl IntoView {
    let CallToActionContent {
        heading,
        paragraphs,
        action,
    } = content;

    match variant {
        CtaVariant::Banner => view! {
            <section class=css::banner>
                <div class=format!("{} {}", css::container, css::center)>
                    <h2 class=css::bannerTitle>
                        <HeadingText heading=heading />
                    </h2>
                    <Paragraphs paragraphs=paragraphs />
                    <ActionButton action=action class=css::bannerAction />
                </div>
            </section>
        }
        .into_any(),
        CtaVariant::Closing => view! {
            <section class=css::block>
                <SectionTitle heading=heading small=true />
                <div class=css::center>
                    <Paragraphs paragraphs=paragraphs />
                    <Floating>
                        <ActionButton action=action class=css::closingAction />
                    </Floating>
                </div>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn AboutHero(content: AboutHeroContent) -> impl IntoView {
    view! {
        <header class=css::aboutHero>
            <div class=css::container>
                <h1 class=css::aboutHeroTitle>
                    <HeadingText heading=content.heading />
                </h1>
                <p class=css::aboutHeroTagline>{content.tagline}</p>
            </div>
        </header>
    }
}

#[component]
fn Mission(content: MissionContent) -> impl IntoView {
    let MissionContent {
        heading,
        paragraphs,
        facts_title,
        facts,
    } = content;

    view! {
        <section class=css::block>
            <SectionTitle heading=heading small=true />
            <div class=css::missionGrid>
                <div>
                    <Paragraphs paragraphs=paragraphs />
                </div>
                <Floating>
                    <div class=css::factsCard>
                        <h3 class=css::factsTitle>{facts_title}</h3>
                        <ul class=css::factsList>
                            {facts
                                .into_iter()
                                .map(|fact| {
                                    view! {
                                        <li class=css::fact>
                                            <span class=css::factIcon>
                                                <Icon icon=ic::for_name(fact.icon) />
                                            </span>
                                            {fact.text}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Floating>
            </div>
        </section>
    }
}
