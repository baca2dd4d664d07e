mod common;

#[cfg(test)]
pub mod feature_showcase_tests {
    use leptos::prelude::*;

    use super::common::*;

    use sitefront::catalog::FEATURES;
    use sitefront::frontend::components::{FeatureShowcase, ProductFeatureShowcase};
    use sitefront::models::{FeatureDescriptor, FeatureImage};

    fn feature(title: &str, href: &str, cta: &str) -> FeatureDescriptor {
        FeatureDescriptor {
            title: title.into(),
            description: format!("{title} description"),
            href: href.into(),
            cta_label: cta.into(),
            image: FeatureImage {
                src: format!("/img/{href}.webp"),
                alt: format!("{title} screenshot"),
                caption: format!("{title} caption"),
            },
        }
    }

    #[test]
    fn every_catalog_feature_becomes_a_card_in_order() {
        let doc = render(|| view! { <ProductFeatureShowcase/> });

        let cards = select(&doc, "section[data-key]");
        assert_eq!(cards.len(), FEATURES.len());

        for (card, feature) in cards.iter().zip(FEATURES.iter()) {
            assert_eq!(attr(*card, "data-key"), Some(feature.title.as_str()));
            assert_eq!(text(select_in(*card, "h4")[0]), feature.title);
            assert_eq!(text(select_in(*card, "p")[0]), feature.description);

            let cta = select_in(*card, "a.feature-cta");
            assert_eq!(cta.len(), 1);
            assert_eq!(text(cta[0]), feature.cta_label);
            assert_eq!(attr(cta[0], "href"), Some(feature.href.as_str()));

            let img = select_in(*card, "figure img")[0];
            assert_eq!(attr(img, "src"), Some(feature.image.src.as_str()));
            assert_eq!(attr(img, "alt"), Some(feature.image.alt.as_str()));
        }
    }

    #[test]
    fn feature_figures_never_show_attribution() {
        let doc = render(|| view! { <ProductFeatureShowcase/> });

        for (caption, feature) in select(&doc, "figcaption").iter().zip(FEATURES.iter()) {
            assert_eq!(text(*caption), feature.image.caption);
        }
        assert!(select(&doc, "figcaption a").is_empty());
    }

    #[test]
    fn custom_list_keeps_its_order() {
        let features = vec![
            feature("Zeta", "zeta", "Go to Zeta"),
            feature("Alpha", "alpha", "Go to Alpha"),
        ];
        let doc = render(move || view! { <FeatureShowcase features=features/> });

        let titles: Vec<String> = select(&doc, "section[data-key] h4")
            .into_iter()
            .map(text)
            .collect();
        assert_eq!(titles, vec!["Zeta", "Alpha"]);

        let hrefs: Vec<&str> = select(&doc, "a.feature-cta")
            .into_iter()
            .filter_map(|a| attr(a, "href"))
            .collect();
        assert_eq!(hrefs, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_list_renders_an_empty_track() {
        let doc = render(|| view! { <FeatureShowcase features=Vec::new()/> });

        assert_eq!(select(&doc, ".feature-track").len(), 1);
        assert!(select(&doc, "section[data-key]").is_empty());
    }

    #[test]
    fn track_and_cards_snap_horizontally() {
        let doc = render(|| view! { <ProductFeatureShowcase/> });

        let track = classes(select(&doc, ".feature-track")[0]);
        for class in ["flex", "snap-x", "snap-mandatory", "overflow-x-auto", "scroll-smooth"] {
            assert!(track.iter().any(|c| c == class), "track is missing {class}");
        }

        for card in select(&doc, "section[data-key]") {
            let card = classes(card);
            for class in ["snap-start", "flex-shrink-0", "w-full", "md:w-8/12"] {
                assert!(card.iter().any(|c| c == class), "card is missing {class}");
            }
        }
    }
}
