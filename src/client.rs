use crate::{
    cache::RevalidationCache,
    errors::{ContentError, ContentResult},
    merge::{merge_profile, ProfileView},
    query::Query,
    types::{
        AboutSection, ContactSection, Envelope, HeroSection, Media, Portfolio, Profile, Service,
        Skill, Testimonial,
    },
};
use reqwest::{
    header::{self, HeaderValue},
    Client,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{env, time::Duration};
use tracing::{debug, warn};

/// Default revalidation window applied when neither the client options nor
/// the query override it.
const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60);

const PROFILE_PATH: &str = "/api/profile";
// The backend collection UID carries a historical misspelling; it is part of
// the wire contract, as are the component populate keys below.
const PORTFOLIO_PATH: &str = "/api/portofolios";
const SKILLS_PATH: &str = "/api/skills";
const TESTIMONIALS_PATH: &str = "/api/testimonials";
const SERVICES_PATH: &str = "/api/services";
const HERO_SECTION_PATH: &str = "/api/hero-section";
const ABOUT_SECTION_PATH: &str = "/api/about-section";
const CONTACT_SECTION_PATH: &str = "/api/contact-section";

#[derive(Debug, Clone, Default)]
pub struct ContentClientOptions {
    /// Origin of the content backend, e.g. `http://localhost:1337`.
    /// Required; construction fails without it.
    pub base_url: Option<String>,
    /// Locale applied to localized reads when the call site passes none.
    pub default_locale: Option<String>,
    /// Revalidation window for cached responses. Defaults to 60 seconds.
    pub revalidate: Option<Duration>,
}

/// Client for the headless content backend.
///
/// All reads are one-shot (no retries, no backoff) and flow through a TTL
/// revalidation cache keyed by request URL. Required resources (profile,
/// portfolio items, skills) fail hard; optional ones (section overlays,
/// testimonials, services) soft-fail to an empty envelope.
pub struct ContentClient {
    base_url: String,
    default_locale: Option<String>,
    revalidate: Duration,
    http: Client,
    cache: RevalidationCache,
}

impl ContentClient {
    pub fn new(options: ContentClientOptions) -> ContentResult<Self> {
        let base_url = options
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ContentError::MissingBaseUrl)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_locale: options.default_locale,
            revalidate: options.revalidate.unwrap_or(DEFAULT_REVALIDATE),
            http: Client::builder().default_headers(headers).build()?,
            cache: RevalidationCache::default(),
        })
    }

    /// Builds a client from the `CONTENT_API_URL` environment variable.
    pub fn from_env() -> ContentResult<Self> {
        Self::new(ContentClientOptions {
            base_url: env::var("CONTENT_API_URL").ok(),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one envelope from `path` with the given query.
    ///
    /// Consults the revalidation cache first; on a miss, issues a single GET
    /// and maps a non-2xx response to [`ContentError::Status`] carrying the
    /// full request URL.
    pub async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> ContentResult<T> {
        let mut builder = self.http.get(format!("{}{path}", self.base_url));
        if !query.is_empty() {
            builder = builder.query(query.pairs());
        }
        let request = builder.build()?;
        let url = request.url().to_string();
        let window = query.revalidate.unwrap_or(self.revalidate);

        if let Some(body) = self.cache.get(&url, window) {
            debug!(%url, "serving cached body within revalidation window");
            return decode(body, &url);
        }

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status, url));
        }

        let body = response.json::<Value>().await?;
        self.cache.insert(&url, body.clone());
        decode(body, &url)
    }

    /// The profile single type with its components populated. Required
    /// resource: failures propagate.
    pub async fn get_profile(
        &self,
        locale: Option<&str>,
    ) -> ContentResult<Envelope<Option<Profile>>> {
        let mut query = Query::new()
            .populate("social_links")
            .populate("portofolio_number")
            .populate("profileImage");
        if let Some(locale) = locale.or(self.default_locale.as_deref()) {
            query = query.locale(locale);
        }
        self.fetch_envelope(PROFILE_PATH, &query).await
    }

    /// All portfolio items, newest first. Required resource.
    pub async fn get_portfolio_items(&self) -> ContentResult<Envelope<Vec<Portfolio>>> {
        let query = Query::new().sort("year:desc").populate("techTags");
        self.fetch_envelope(PORTFOLIO_PATH, &query).await
    }

    /// Portfolio items flagged as featured, newest first. Required resource.
    pub async fn get_featured_portfolio_items(&self) -> ContentResult<Envelope<Vec<Portfolio>>> {
        let query = Query::new()
            .filter_eq("isFeatured", "true")
            .sort("year:desc")
            .populate("techTags");
        self.fetch_envelope(PORTFOLIO_PATH, &query).await
    }

    /// One portfolio item looked up by slug, or `None` when the filter
    /// matches nothing. "Not found" is not an error here.
    pub async fn get_portfolio_item_by_slug(
        &self,
        slug: &str,
        locale: Option<&str>,
    ) -> ContentResult<Option<Portfolio>> {
        let mut query = Query::new()
            .filter_eq("slug", slug)
            .populate("coverImage")
            .populate("gallery")
            .populate("techTags");
        if let Some(locale) = locale.or(self.default_locale.as_deref()) {
            query = query.locale(locale);
        }
        let envelope: Envelope<Vec<Portfolio>> = self.fetch_envelope(PORTFOLIO_PATH, &query).await?;
        Ok(envelope.data.into_iter().next())
    }

    /// All skills in display order. Required resource.
    pub async fn get_skills(&self) -> ContentResult<Envelope<Vec<Skill>>> {
        self.fetch_envelope(SKILLS_PATH, &Query::new().sort("order:asc"))
            .await
    }

    /// Testimonials. Optional resource: soft-fails to an empty collection.
    pub async fn get_testimonials(&self) -> Envelope<Vec<Testimonial>> {
        self.optional_collection(TESTIMONIALS_PATH, Query::new().populate("avatar"))
            .await
    }

    /// Services. Optional resource: soft-fails to an empty collection.
    pub async fn get_services(&self) -> Envelope<Vec<Service>> {
        self.optional_collection(SERVICES_PATH, Query::new()).await
    }

    /// Hero section overlay. Optional resource: soft-fails to an empty
    /// envelope so deployments without the record still render.
    pub async fn get_hero_section(&self) -> Envelope<Option<HeroSection>> {
        self.optional_single(HERO_SECTION_PATH).await
    }

    /// About section overlay. Optional resource.
    pub async fn get_about_section(&self) -> Envelope<Option<AboutSection>> {
        self.optional_single(ABOUT_SECTION_PATH).await
    }

    /// Contact section overlay. Optional resource.
    pub async fn get_contact_section(&self) -> Envelope<Option<ContactSection>> {
        self.optional_single(CONTACT_SECTION_PATH).await
    }

    /// Fetches the profile and the three section overlays concurrently and
    /// merges them into one view model. Only the profile fetch can fail the
    /// call; the overlays soft-fail individually.
    pub async fn get_profile_view(&self, locale: Option<&str>) -> ContentResult<Option<ProfileView>> {
        let (profile, hero, about, contact) = futures::join!(
            self.get_profile(locale),
            self.get_hero_section(),
            self.get_about_section(),
            self.get_contact_section(),
        );
        let profile = profile?;
        Ok(merge_profile(profile.data, hero.data, about.data, contact.data))
    }

    /// Resolves a possibly-relative media path against the backend origin.
    /// Absolute URLs pass through unchanged.
    #[must_use]
    pub fn resolve_media_url(&self, url: &str) -> String {
        if url.is_empty() {
            String::new()
        } else if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{url}", self.base_url)
        }
    }

    #[must_use]
    pub fn media_url(&self, media: &Media) -> String {
        self.resolve_media_url(&media.url)
    }

    async fn optional_single<T: DeserializeOwned>(&self, path: &str) -> Envelope<Option<T>> {
        match self
            .fetch_envelope(path, &Query::new().populate_all())
            .await
        {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(path, error = %err, "optional section unavailable, substituting empty envelope");
                Envelope::default()
            }
        }
    }

    async fn optional_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
    ) -> Envelope<Vec<T>> {
        match self.fetch_envelope(path, &query).await {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(path, error = %err, "optional collection unavailable, substituting empty envelope");
                Envelope::default()
            }
        }
    }
}

fn decode<T: DeserializeOwned>(body: Value, url: &str) -> ContentResult<T> {
    serde_json::from_value(body).map_err(|err| ContentError::Decode(err, url.to_string()))
}
