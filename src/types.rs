use serde::{Deserialize, Serialize};

/// The `{ data, meta }` wrapper returned by every backend read.
///
/// `data` is always present on a successful response; failure is signaled by
/// an error from the fetch layer, never by a missing envelope. Collection
/// endpoints use `Envelope<Vec<T>>`, single types use `Envelope<Option<T>>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

/// An uploaded media asset. `url` may be relative to the backend origin;
/// use [`crate::ContentClient::media_url`] to resolve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: u64,
    #[serde(default)]
    pub document_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<MediaFormats>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFormats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<MediaFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<MediaFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<MediaFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFormat {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// One element of the backend's rich-text tree format.
///
/// The node set is closed from this crate's point of view: anything the
/// backend grows in the future lands in `Unknown` and renders as nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading(HeadingBlock),
    List(ListBlock),
    ListItem(ListItemBlock),
    Text(TextLeaf),
    #[serde(other)]
    Unknown,
}

// `children` stays `Option` on every branch node: the renderer skips a node
// whose children key is absent entirely, while a present-but-empty array
// still produces an (empty) display node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ListFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLeaf {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    Unordered,
}

/// A labeled social/contact link owned by the record that contains it.
/// Ids are assigned by the backend; array order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: u64,
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<String>,
}

/// A headline statistic ("12 projects shipped") shown on hero/about blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioNumber {
    pub id: u64,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechTag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ContentCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Frontend,
    Backend,
    Cms,
    Ecommerce,
    Tool,
}

/// The profile single type: the base record every page starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    #[serde(default)]
    pub document_id: String,
    pub brand_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub short_info: String,
    #[serde(default)]
    pub about: Vec<Block>,
    #[serde(default)]
    pub services: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_availability_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_i_do_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_logo: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_logo: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<Media>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub portfolio_number: Vec<PortfolioNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Optional overlay single type for the hero section. Every field is
/// optional: deployments that never created the record simply contribute
/// nothing to the merged view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_availability_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta_url: Option<String>,
    #[serde(default)]
    pub portfolio_number: Vec<PortfolioNumber>,
}

/// Optional overlay single type for the about section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_section_title: Option<String>,
    #[serde(default)]
    pub about: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_i_do_list: Option<String>,
    #[serde(default)]
    pub portfolio_number: Vec<PortfolioNumber>,
}

/// Optional overlay single type for the contact section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_section_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_copy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    Real,
    Dummy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioType {
    LandingPage,
    Commerce,
    WebApp,
}

/// A portfolio item (collection type).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: u64,
    #[serde(default)]
    pub document_id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: Vec<Block>,
    #[serde(default)]
    pub problem: Vec<Block>,
    #[serde(default)]
    pub solution: Vec<Block>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_type: Option<PortfolioType>,
    #[serde(default)]
    pub tech_tags: Vec<TechTag>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Media>,
    #[serde(default)]
    pub gallery: Vec<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: u64,
    #[serde(default)]
    pub document_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ContentCategory>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u64,
    #[serde(default)]
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    #[serde(default)]
    pub document_id: String,
    pub title: String,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}
