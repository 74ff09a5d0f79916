use crate::types::{
    AboutSection, Block, ContactSection, HeroSection, Media, PortfolioNumber, Profile, SocialLink,
};

/// The flattened, merged record consumed directly by presentation code.
///
/// Every field is optional: a field that no source carried is simply absent,
/// and fallback copy is the presentation layer's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileView {
    pub brand_name: Option<String>,
    pub tagline: Option<String>,
    pub short_info: Option<String>,
    pub hero_availability_text: Option<String>,
    pub primary_cta_label: Option<String>,
    pub primary_cta_url: Option<String>,
    pub secondary_cta_label: Option<String>,
    pub secondary_cta_url: Option<String>,
    pub about_section_title: Option<String>,
    pub about: Vec<Block>,
    pub what_i_do_list: Option<String>,
    pub contact_section_title: Option<String>,
    pub contact_copy: Option<String>,
    pub contact_email: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub portfolio_number: Vec<PortfolioNumber>,
    pub profile_image: Option<Media>,
}

/// Last non-empty source wins: an empty or absent overlay value never
/// clobbers a previously set field, and never injects an empty one.
fn overlay_text(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            *slot = Some(value);
        }
    }
}

fn overlay_vec<T>(slot: &mut Vec<T>, value: Vec<T>) {
    if !value.is_empty() {
        *slot = value;
    }
}

/// Merge the base profile with the optional hero/about/contact overlays into
/// one view model. Returns `None` when there is no base record to merge
/// onto.
///
/// Merge order is fixed: base, then hero, then about, then contact, with
/// later non-empty sources winning per field. The one exception is
/// `portfolio_number`, where the hero overlay keeps precedence even when
/// the about overlay also carries values (first non-empty overlay wins).
/// That asymmetry matches the shipped behavior and is kept on purpose.
#[must_use]
pub fn merge_profile(
    base: Option<Profile>,
    hero: Option<HeroSection>,
    about: Option<AboutSection>,
    contact: Option<ContactSection>,
) -> Option<ProfileView> {
    let base = base?;

    let mut view = ProfileView::default();

    overlay_text(&mut view.brand_name, Some(base.brand_name));
    overlay_text(&mut view.tagline, Some(base.tagline));
    overlay_text(&mut view.short_info, Some(base.short_info));
    overlay_text(&mut view.hero_availability_text, base.hero_availability_text);
    overlay_text(&mut view.primary_cta_label, base.primary_cta_label);
    overlay_text(&mut view.primary_cta_url, base.primary_cta_url);
    overlay_text(&mut view.secondary_cta_label, base.secondary_cta_label);
    overlay_text(&mut view.secondary_cta_url, base.secondary_cta_url);
    overlay_text(&mut view.what_i_do_list, base.what_i_do_list);
    overlay_vec(&mut view.about, base.about);
    overlay_vec(&mut view.social_links, base.social_links);
    overlay_vec(&mut view.portfolio_number, base.portfolio_number);
    view.profile_image = base.profile_image;

    let mut overlay_numbers: Vec<PortfolioNumber> = Vec::new();

    if let Some(hero) = hero {
        overlay_text(&mut view.brand_name, hero.brand_name);
        overlay_text(&mut view.tagline, hero.tagline);
        overlay_text(&mut view.hero_availability_text, hero.hero_availability_text);
        overlay_text(&mut view.primary_cta_label, hero.primary_cta_label);
        overlay_text(&mut view.primary_cta_url, hero.primary_cta_url);
        overlay_text(&mut view.secondary_cta_label, hero.secondary_cta_label);
        overlay_text(&mut view.secondary_cta_url, hero.secondary_cta_url);
        overlay_vec(&mut overlay_numbers, hero.portfolio_number);
    }

    if let Some(about) = about {
        overlay_text(&mut view.about_section_title, about.about_section_title);
        overlay_text(&mut view.what_i_do_list, about.what_i_do_list);
        overlay_vec(&mut view.about, about.about);
        // Guarded field: about's numbers apply only when hero contributed
        // none.
        if overlay_numbers.is_empty() {
            overlay_numbers = about.portfolio_number;
        }
    }

    if let Some(contact) = contact {
        overlay_text(&mut view.contact_section_title, contact.contact_section_title);
        overlay_text(&mut view.contact_copy, contact.contact_copy);
        overlay_text(&mut view.contact_email, contact.contact_email);
        overlay_vec(&mut view.social_links, contact.social_links);
    }

    overlay_vec(&mut view.portfolio_number, overlay_numbers);

    Some(view)
}
