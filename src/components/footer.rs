//! Site footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::primitives::GoldText;
use crate::config::APP_NAME;
use crate::models::FooterContent;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer(content: FooterContent) -> impl IntoView {
    let FooterContent {
        legal,
        socials,
        copyright,
    } = content;

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::top>
                    <a href="#" class=css::brand>
                        <GoldText>{APP_NAME}</GoldText>
                    </a>
                    <div class=css::legal>
                        {legal
                            .into_iter()
                            .map(|link| view! { <a href=link.href class=css::legalLink>{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>

                <div class=css::socials>
                    {socials
                        .into_iter()
                        .map(|social| {
                            let title = social.name.clone();
                            view! {
                                <a href=social.href class=css::social title=title>
                                    <span class=css::srOnly>{social.name}</span>
                                    <Icon icon=ic::for_name(social.icon) />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=css::copyright>{copyright}</div>
            </div>
        </footer>
    }
}
