use std::fmt;

use chrono::{DateTime, Local, Offset, SecondsFormat, TimeZone, Utc};
use rand::Rng;

use crate::utils::{hash, id_generator};

use ParamValue::*;
use TimestampFormat::*;

/// Literal bytes behind the `payload` parameter
const PAYLOAD: &[u8] = b"meaningless-payload-data";

/// How a clock reading is written into a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Seconds since the unix epoch
    UnixSeconds,
    /// Milliseconds since the unix epoch
    UnixMillis,
    /// RFC 3339 with whole seconds, e.g. `2024-01-15T14:23:45-08:00`
    Rfc3339,
    /// RFC 3339 with nanoseconds, trailing zeros (and a bare `.`) trimmed
    Rfc3339Subsec,
    /// RFC 1123 in UTC, e.g. `Mon, 15 Jan 2024 22:23:45 UTC`
    Rfc1123Utc,
    /// RFC 1123 with a numeric offset, e.g. `Mon, 15 Jan 2024 14:23:45 -0800`
    Rfc1123Offset,
}

impl TimestampFormat {
    pub fn render<Tz: TimeZone>(self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            UnixSeconds => now.timestamp().to_string(),
            UnixMillis => now.timestamp_millis().to_string(),
            Rfc3339 => now.to_rfc3339_opts(SecondsFormat::Secs, true),
            Rfc3339Subsec => {
                let nanos = format!("{:09}", now.timestamp_subsec_nanos());
                let fraction = nanos.trim_end_matches('0');
                let offset = if now.offset().fix().local_minus_utc() == 0 {
                    "Z".to_string()
                } else {
                    now.format("%:z").to_string()
                };
                format!(
                    "{}{}{}{}",
                    now.format("%Y-%m-%dT%H:%M:%S"),
                    if fraction.is_empty() { "" } else { "." },
                    fraction,
                    offset
                )
            }
            Rfc1123Utc => now
                .with_timezone(&Utc)
                .format("%a, %d %b %Y %H:%M:%S UTC")
                .to_string(),
            Rfc1123Offset => now.format("%a, %d %b %Y %H:%M:%S %z").to_string(),
        }
    }
}

/// The value half of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    /// Placeholder text, emitted as-is
    Fixed(&'static str),
    /// Random `[a-z0-9]` token of the given length
    Token(usize),
    /// UUID-like `8-4-4-4-12` token
    GroupedToken,
    /// The call's clock reading
    Timestamp(TimestampFormat),
    /// Base64 of the raw input URL
    OriginalUrlBase64,
    /// SHA-256 hex of the raw input URL
    UrlHash,
    /// Base64 of a constant payload
    PayloadBase64,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub value: ParamValue,
}

const fn entry(key: &'static str, value: ParamValue) -> CatalogEntry {
    CatalogEntry { key, value }
}

const fn fixed(key: &'static str, text: &'static str) -> CatalogEntry {
    entry(key, Fixed(text))
}

/// Per-call inputs shared by every rendered entry.
///
/// The clock is read once, so all timestamp entries of one URL agree.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub original_url: &'a str,
    pub url_hash: &'a str,
    pub now: DateTime<Local>,
}

impl CatalogEntry {
    /// Renders the entry as a `key=value` query parameter
    pub fn render<R: Rng>(&self, ctx: &RenderContext<'_>, rng: &mut R) -> String {
        let value = match self.value {
            Fixed(text) => text.to_string(),
            Token(len) => id_generator::generate_random_id(rng, len),
            GroupedToken => id_generator::generate_grouped_id(rng),
            Timestamp(format) => format.render(&ctx.now),
            OriginalUrlBase64 => hash::encode_base64(ctx.original_url.as_bytes()),
            UrlHash => ctx.url_hash.to_string(),
            PayloadBase64 => hash::encode_base64(PAYLOAD),
        };
        format!("{}={}", self.key, value)
    }

    /// Checks whether `param` is something [`CatalogEntry::render`] could produce for `ctx`
    #[cfg(test)]
    pub fn accepts(&self, param: &str, ctx: &RenderContext<'_>) -> bool {
        let Some(value) = param
            .strip_prefix(self.key)
            .and_then(|rest| rest.strip_prefix('='))
        else {
            return false;
        };

        match self.value {
            Fixed(text) => value == text,
            Token(len) => id_generator::is_random_id(value, len),
            GroupedToken => id_generator::is_grouped_id(value),
            Timestamp(format) => value == format.render(&ctx.now),
            OriginalUrlBase64 => value == hash::encode_base64(ctx.original_url.as_bytes()),
            UrlHash => value == ctx.url_hash,
            PayloadBase64 => value == hash::encode_base64(PAYLOAD),
        }
    }
}

/// Renders every catalog entry, in catalog order
pub fn render_all<R: Rng>(ctx: &RenderContext<'_>, rng: &mut R) -> Vec<String> {
    CATALOG.iter().map(|entry| entry.render(ctx, rng)).collect()
}

/// Checks whether `param` is a rendering of any catalog entry
#[cfg(test)]
pub fn is_catalog_param(param: &str, ctx: &RenderContext<'_>) -> bool {
    CATALOG.iter().any(|entry| entry.accepts(param, ctx))
}

/// Every parameter a long URL can carry.
///
/// Keys are not unique; fixed text never contains `&`.
pub static CATALOG: &[CatalogEntry] = &[
    // Identifiers
    entry("session_id", Token(32)),
    entry("request_id", Token(16)),
    entry("correlation_id", GroupedToken),
    entry("tracking_pixel_id", Token(24)),
    entry("transaction_id", GroupedToken),
    entry("visitor_id", Token(28)),
    entry("client_id", Token(20)),
    entry("anonymous_id", GroupedToken),
    entry("user_id", GroupedToken),
    entry("account_id", Token(18)),
    entry("organization_id", GroupedToken),
    entry("workspace_id", Token(22)),
    entry("team_id", Token(16)),
    entry("project_id", GroupedToken),
    entry("trace_id", Token(32)),
    entry("span_id", Token(16)),
    entry("parent_span_id", Token(16)),
    entry("conversation_id", GroupedToken),
    entry("interaction_id", Token(24)),
    entry("event_id", GroupedToken),
    // Clock readings
    entry("timestamp_unix", Timestamp(UnixSeconds)),
    entry("timestamp_iso", Timestamp(Rfc3339)),
    entry("timestamp_epoch_ms", Timestamp(UnixMillis)),
    entry("timestamp_utc", Timestamp(Rfc1123Utc)),
    entry("timestamp_rfc2822", Timestamp(Rfc1123Offset)),
    entry("server_time", Timestamp(UnixSeconds)),
    entry("client_time", Timestamp(UnixMillis)),
    entry("request_timestamp", Timestamp(Rfc3339)),
    entry("created_at", Timestamp(UnixSeconds)),
    entry("updated_at", Timestamp(UnixSeconds)),
    entry("processed_at", Timestamp(UnixMillis)),
    entry("received_at", Timestamp(Rfc3339Subsec)),
    // Marketing
    fixed("utm_source", "organic-social-media-platform-referral"),
    fixed("utm_medium", "referral-link-sharing-mechanism-protocol"),
    fixed("utm_campaign", "user-generated-content-distribution-initiative"),
    fixed("utm_term", "highly-relevant-search-keywords-semantic-analysis"),
    fixed("utm_content", "premium-quality-engagement-content-variant-a"),
    fixed("utm_id", "campaign-identifier-unique-tracking-string"),
    fixed("utm_source_platform", "cross-platform-social-aggregator-service"),
    fixed("utm_creative_format", "responsive-display-advertisement-unit"),
    fixed("utm_marketing_tactic", "inbound-content-marketing-strategy"),
    fixed("marketing_channel", "omnichannel-digital-experience-touchpoint"),
    fixed("campaign_name", "quarterly-engagement-growth-initiative-q4"),
    fixed("campaign_type", "awareness-consideration-conversion-funnel"),
    fixed("ad_group", "targeted-demographic-psychographic-segment"),
    fixed("ad_group_id", "advertisement-group-unique-identifier"),
    fixed("creative_id", "creative-asset-version-identifier"),
    fixed("placement_id", "advertising-placement-location-code"),
    fixed("keyword", "search-engine-marketing-keyword-match"),
    fixed("match_type", "broad-phrase-exact-keyword-matching"),
    fixed("ad_position", "search-engine-results-page-position"),
    fixed("network", "search-display-video-network-type"),
    // Encodings and digests
    entry("original_url_encoded", OriginalUrlBase64),
    entry("url_hash", UrlHash),
    entry("payload", PayloadBase64),
    entry("signature", Token(64)),
    entry("checksum", Token(32)),
    entry("hmac", Token(64)),
    entry("digest", Token(40)),
    entry("fingerprint", Token(48)),
    entry("verification_token", Token(32)),
    entry("integrity_hash", Token(56)),
    // Device
    entry("device_fingerprint", Token(40)),
    entry("canvas_fingerprint", Token(32)),
    entry("audio_fingerprint", Token(28)),
    entry("webgl_fingerprint", Token(36)),
    fixed("browser_session_storage_available", "true-verified"),
    fixed("browser_local_storage_available", "true-verified"),
    fixed("browser_indexed_db_available", "true-verified"),
    fixed("cookies_enabled", "definitely-yes-absolutely-confirmed"),
    fixed("third_party_cookies_enabled", "deprecated-browser-policy"),
    fixed("screen_resolution", "1920x1080-high-definition-display"),
    fixed("screen_width", "1920-pixels-horizontal"),
    fixed("screen_height", "1080-pixels-vertical"),
    fixed("available_screen_width", "1920-pixels-available"),
    fixed("available_screen_height", "1040-pixels-available"),
    fixed("color_depth", "24-bit-true-color-display"),
    fixed("pixel_ratio", "2.0-retina-display-hdpi"),
    fixed("viewport_width", "1920-pixels-initial-viewport"),
    fixed("viewport_height", "1080-pixels-initial-viewport"),
    fixed("device_memory", "8gb-ram-available-javascript"),
    fixed("hardware_concurrency", "8-logical-processors-available"),
    fixed("max_touch_points", "0-no-touch-support"),
    fixed("platform", "win32-windows-operating-system-platform"),
    fixed("user_agent", "mozilla-5.0-chrome-compatible-browser"),
    fixed("browser_name", "chromium-based-web-browser-engine"),
    fixed("browser_version", "120.0.6099.129-stable-release"),
    fixed("browser_major_version", "120-current-major"),
    fixed("engine_name", "blink-rendering-engine-webkit-fork"),
    fixed("engine_version", "120.0.6099.129-engine-version"),
    fixed("os_name", "windows-nt-10.0-latest-version"),
    fixed("os_version", "10.0.19045-build-number"),
    fixed("device_type", "desktop-workstation-computer-form-factor"),
    fixed("device_vendor", "generic-pc-compatible-manufacturer"),
    fixed("device_model", "desktop-standard-configuration"),
    fixed("cpu_architecture", "x86-64-amd64-intel-compatible"),
    fixed("gpu_vendor", "nvidia-amd-intel-graphics"),
    fixed("gpu_renderer", "angle-direct3d11-opengl-backend"),
    fixed("touch_support", "enabled-multitouch-gestures-available"),
    fixed("pointer_type", "mouse-primary-input-device"),
    fixed("orientation", "landscape-primary-screen-orientation"),
    fixed("vendor", "google-inc-chromium-project"),
    fixed("vendor_sub", "official-build-distribution"),
    fixed("product", "gecko-compatibility-mode"),
    fixed("product_sub", "20030107-gecko-version"),
    // Locale and geography
    fixed("timezone_offset", "-480-minutes-pst-pacific"),
    fixed("timezone", "America-Los_Angeles-tz-database"),
    fixed("language_preference", "en-US-english-united-states-locale"),
    fixed("language", "en-primary-language-code"),
    fixed("languages", "en-US,en;q=0.9-accepted-languages"),
    fixed("locale", "en-US-american-english-locale-identifier"),
    fixed("country_code", "US-united-states-america-iso"),
    fixed("country_name", "United-States-of-America-full"),
    fixed("region", "california-west-coast-state"),
    fixed("region_code", "CA-california-abbreviation"),
    fixed("city", "san-francisco-bay-area-location"),
    fixed("postal_code", "94102-geographic-zip-code"),
    fixed("latitude", "37.7749-degrees-north-coordinate"),
    fixed("longitude", "-122.4194-degrees-west-coordinate"),
    fixed("accuracy", "50-meters-geolocation-precision"),
    fixed("altitude", "52-meters-above-sea-level"),
    fixed("altitude_accuracy", "10-meters-altitude-precision"),
    fixed("heading", "null-direction-not-available"),
    fixed("speed", "null-velocity-not-available"),
    fixed("ip_address_hash", "anonymized-for-privacy-gdpr-compliant"),
    fixed("ip_version", "ipv4-internet-protocol-version"),
    fixed("isp", "internet-service-provider-name-redacted"),
    fixed("asn", "autonomous-system-number-redacted"),
    fixed("connection_type", "wifi-wireless-broadband-connection"),
    // Consent
    fixed("do_not_track", "1-respectfully-ignored-by-default"),
    fixed("global_privacy_control", "0-gpc-signal-not-set"),
    fixed("gdpr_consent", "CP1234567890-tcf-v2-consent-string"),
    fixed("gdpr_applies", "true-european-union-visitor"),
    fixed("ccpa_opt_out", "california-privacy-rights-do-not-sell"),
    fixed("ccpa_applies", "true-california-resident-indicator"),
    fixed("cookie_consent", "all-categories-accepted-timestamp"),
    fixed("cookie_consent_necessary", "true-required-cookies"),
    fixed("cookie_consent_functional", "true-functional-cookies"),
    fixed("cookie_consent_analytics", "true-analytics-cookies"),
    fixed("cookie_consent_advertising", "true-advertising-cookies"),
    fixed("privacy_policy_version", "2024.1.0-latest-revision"),
    fixed("privacy_policy_accepted", "true-user-acknowledged"),
    fixed("terms_of_service_version", "2024.1.0-current"),
    fixed("terms_accepted", "true-user-agreement-confirmed"),
    fixed("age_verification", "confirmed-over-18-years-old"),
    fixed("age_gate_passed", "true-minimum-age-requirement"),
    fixed("data_processing_consent", "granted-explicitly-informed"),
    fixed("marketing_consent", "granted-opt-in-confirmed"),
    fixed("personalization_consent", "granted-tailored-experience"),
    fixed("data_retention_acknowledged", "true-policy-understood"),
    // Timings
    fixed("performance_timing", "enabled-for-analytics-collection"),
    fixed("navigation_timing", "navigation-timing-api-level-2"),
    fixed("resource_timing", "resource-timing-api-enabled"),
    fixed("paint_timing", "first-contentful-paint-metric"),
    fixed("largest_contentful_paint", "2847-milliseconds-lcp"),
    fixed("first_input_delay", "12-milliseconds-fid-metric"),
    fixed("cumulative_layout_shift", "0.045-cls-score"),
    fixed("time_to_interactive", "3240-milliseconds-tti"),
    fixed("total_blocking_time", "287-milliseconds-tbt"),
    fixed("speed_index", "2456-milliseconds-si-metric"),
    fixed("dom_content_loaded", "1847-milliseconds-dcl"),
    fixed("load_complete", "3456-milliseconds-onload"),
    fixed("first_byte", "234-milliseconds-ttfb-server"),
    fixed("dns_lookup", "45-milliseconds-dns-resolution"),
    fixed("tcp_connection", "89-milliseconds-tcp-handshake"),
    fixed("tls_negotiation", "123-milliseconds-ssl-handshake"),
    fixed("request_time", "178-milliseconds-http-request"),
    fixed("response_time", "234-milliseconds-http-response"),
    fixed("dom_processing", "892-milliseconds-dom-parse"),
    fixed("render_time", "445-milliseconds-rendering"),
    // Browser capabilities
    fixed("javascript_enabled", "true-scripts-allowed-executed"),
    fixed("webgl_support", "enabled-3d-graphics-hardware-acceleration"),
    fixed("webgl_version", "2.0-opengl-es-3.0-context"),
    fixed("webgl2_support", "true-modern-graphics-api"),
    fixed("web_audio_api", "supported-audio-context-available"),
    fixed("web_rtc", "supported-real-time-communication"),
    fixed("web_workers", "supported-background-threads"),
    fixed("service_workers", "supported-progressive-web-app"),
    fixed("push_notifications", "supported-browser-capability"),
    fixed("notifications_permission", "default-not-granted"),
    fixed("geolocation_permission", "prompt-not-decided"),
    fixed("camera_permission", "denied-user-declined"),
    fixed("microphone_permission", "denied-user-declined"),
    fixed("midi_support", "true-web-midi-api"),
    fixed("payment_request", "supported-web-payments"),
    fixed("credential_management", "supported-credentials-api"),
    fixed("web_assembly", "supported-wasm-execution"),
    fixed("shared_array_buffer", "supported-cross-origin-isolated"),
    fixed("web_usb", "supported-usb-device-access"),
    fixed("web_bluetooth", "not-supported-browser-limitation"),
    fixed("nfc", "not-supported-near-field-communication"),
    fixed("local_fonts", "supported-font-enumeration-api"),
    // Navigation
    fixed("referrer_type", "direct-navigation-user-intent-typed"),
    fixed("referrer_url", "none-direct-traffic-source"),
    fixed("referrer_domain", "direct-no-referring-domain"),
    fixed("landing_page", "current-entry-point-url-path"),
    fixed("entry_page", "initial-session-landing-page"),
    fixed("exit_page", "null-session-still-active"),
    fixed("previous_page", "document-referrer-same-origin"),
    fixed("page_depth", "5-clicks-from-home-page"),
    fixed("visit_count", "42-lifetime-visits-returning"),
    fixed("session_count", "18-total-sessions-historical"),
    fixed("return_visitor", "true-recognized-user-profile"),
    fixed("new_visitor", "false-existing-profile-identified"),
    fixed("days_since_last_visit", "7-days-elapsed"),
    fixed("visits_today", "2-sessions-current-day"),
    fixed("bounce_rate", "calculated-engagement-metric-percentage"),
    fixed("engagement_score", "87-calculated-user-quality"),
    // Experiments
    fixed("ab_test_variant", "control-group-baseline-original"),
    fixed("ab_test_id", "test-unique-identifier-uuid"),
    fixed("experiment_id", "feature-flag-test-123-active"),
    fixed("experiment_name", "homepage-hero-test-variant"),
    fixed("variant_id", "treatment-arm-b-experimental"),
    fixed("variant_name", "new-design-version-two"),
    fixed("cohort", "user-segment-alpha-targeted"),
    fixed("cohort_id", "segment-identifier-uuid"),
    fixed("feature_flag_bundle", "enabled-features-list-json"),
    fixed("feature_flags", "feature-a:true,feature-b:false"),
    fixed("optimization_group", "conversion-rate-test-checkout"),
    fixed("personalization_id", "tailored-experience-identifier"),
    fixed("recommendation_engine", "collaborative-filtering-v2"),
    fixed("test_start_date", "2024-01-15-experiment-launch"),
    fixed("test_allocation", "random-50-50-split-traffic"),
    // Engagement
    fixed("session_duration", "1847-seconds-elapsed-time"),
    fixed("session_start", "2024-01-15T14:23:45Z-iso-timestamp"),
    fixed("page_views", "12-pages-this-session-count"),
    fixed("page_views_total", "247-lifetime-pageviews"),
    fixed("events_fired", "37-interactions-tracked-session"),
    fixed("scroll_depth", "85-percent-scrolled-maximum"),
    fixed("scroll_depth_px", "4280-pixels-scrolled-vertical"),
    fixed("time_on_page", "247-seconds-engaged-current"),
    fixed("active_time", "189-seconds-active-engagement"),
    fixed("idle_time", "58-seconds-inactive-idle"),
    fixed("interaction_count", "14-clicks-recorded-session"),
    fixed("click_count", "9-mouse-clicks-tracked"),
    fixed("keypress_count", "145-keyboard-inputs-recorded"),
    fixed("form_submissions", "2-forms-completed-submitted"),
    fixed("form_starts", "3-forms-initiated-engagement"),
    fixed("video_plays", "1-video-interactions-playback"),
    fixed("video_completion", "0-videos-watched-completely"),
    fixed("downloads", "0-file-downloads-initiated"),
    fixed("outbound_clicks", "2-external-links-clicked"),
    fixed("social_shares", "0-social-sharing-interactions"),
    // Transport
    fixed("connection_type", "wifi-wireless-broadband-network"),
    fixed("connection_speed", "fast-4g-lte-mobile-data"),
    fixed("effective_connection_type", "4g-network-quality"),
    fixed("network_quality", "excellent-low-latency-stable"),
    fixed("bandwidth_estimate", "50-mbps-download-speed"),
    fixed("downlink", "10-mbps-effective-bandwidth"),
    fixed("rtt", "50-milliseconds-round-trip-time"),
    fixed("save_data", "false-data-saver-mode-disabled"),
    fixed("protocol", "https-secure-connection-tls"),
    fixed("protocol_version", "http-2-multiplexed-streams"),
    fixed("tls_version", "1.3-modern-encryption-standard"),
    fixed("cipher_suite", "TLS_AES_128_GCM_SHA256-cipher"),
    fixed("certificate_issuer", "lets-encrypt-authority-x3"),
    fixed("certificate_valid_until", "2025-06-15-expiry"),
    fixed("ocsp_stapling", "enabled-certificate-validation"),
    fixed("hsts", "enforced-strict-transport-security"),
    fixed("http_strict_transport_security", "max-age-31536000"),
    // Credentials
    entry("nonce", Token(16)),
    entry("salt", Token(24)),
    entry("token", Token(48)),
    entry("api_key", Token(32)),
    entry("auth_token", Token(40)),
    entry("bearer_token", Token(64)),
    entry("refresh_token", Token(48)),
    entry("access_token", Token(52)),
    entry("csrf_token", Token(32)),
    entry("state_token", Token(24)),
    entry("oauth_token", Token(40)),
    entry("oauth_verifier", Token(32)),
    entry("code_verifier", Token(128)),
    entry("code_challenge", Token(64)),
    // Infrastructure
    fixed("quantum_entanglement_id", "superposition-state-collapsed-measured"),
    fixed("blockchain_hash", "distributed-ledger-proof-of-work-sha256"),
    fixed("smart_contract_address", "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb"),
    fixed("nft_token_id", "erc-721-non-fungible-token-identifier"),
    fixed("web3_wallet_address", "0x71C7656EC7ab88b098defB751B7401B5f6d8976F"),
    fixed("metaverse_coordinates", "x:1247,y:8934,z:42-virtual-location"),
    fixed("ai_confidence_score", "0.9847-machine-learning-prediction"),
    fixed("neural_network_layer", "deep-learning-inference-layer-42"),
    fixed("ml_model_version", "v2.4.1-trained-2024-01-15"),
    fixed("inference_latency", "23-milliseconds-model-execution"),
    fixed("training_dataset", "proprietary-supervised-learning-corpus"),
    fixed("cloud_region", "us-west-2a-availability-zone-primary"),
    fixed("cloud_provider", "aws-amazon-web-services-ec2"),
    fixed("container_id", "kubernetes-pod-identifier-docker"),
    fixed("pod_name", "frontend-deployment-7d4f9c8b6-xk2lp"),
    fixed("namespace", "production-default-kubernetes-namespace"),
    fixed("cluster_name", "prod-us-west-2-eks-cluster"),
    fixed("microservice_name", "user-authentication-service-v2"),
    fixed("microservice_trace", "distributed-tracing-id-jaeger"),
    fixed("service_mesh", "istio-sidecar-proxy-envoy"),
    fixed("load_balancer_node", "round-robin-selection-algorithm"),
    fixed("backend_server", "server-42-load-balanced-pool"),
    fixed("cache_hit_ratio", "87-percent-cached-redis"),
    fixed("cache_key", "user:1234:profile-memcached-key"),
    fixed("cdn_pop", "edge-location-nearest-cloudflare"),
    fixed("cdn_cache_status", "HIT-served-from-edge"),
    fixed("edge_location", "SFO-san-francisco-pop"),
    fixed("ssl_cipher_suite", "ECDHE-RSA-AES256-GCM-SHA384"),
    fixed("http2_stream_id", "15-multiplexed-connection"),
    fixed("http3_quic_version", "draft-29-udp-protocol"),
    fixed("websocket_protocol", "wss-bidirectional-communication"),
    fixed("graphql_operation", "query-user-profile-batched"),
    fixed("rest_api_version", "v2-restful-web-services"),
    fixed("grpc_method", "GetUser-remote-procedure-call"),
    fixed("message_queue", "rabbitmq-amqp-broker-exchange"),
    fixed("event_bus", "kafka-topic-user-events-partition-3"),
    fixed("database_shard", "shard-7-horizontal-partitioning"),
    fixed("replica_set", "mongodb-primary-replica-set"),
    fixed("read_preference", "secondary-preferred-load-distribution"),
    fixed("write_concern", "majority-acknowledged-durability"),
    fixed("transaction_isolation", "read-committed-acid-level"),
    fixed("service_worker_version", "v24-progressive-web-app"),
    fixed("manifest_version", "web-app-manifest-v2-json"),
    fixed("workbox_version", "6.5.4-service-worker-library"),
    fixed("pwa_install_prompt", "deferred-add-to-homescreen"),
    fixed("notification_permission", "granted-push-enabled"),
    fixed("background_sync", "registered-offline-capability"),
    fixed("indexed_db_version", "3-local-storage-database"),
];

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Timelike};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn pacific_time() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 14, 23, 45)
            .single()
            .unwrap()
    }

    fn context<'a>(original_url: &'a str, url_hash: &'a str) -> RenderContext<'a> {
        RenderContext {
            original_url,
            url_hash,
            now: Local::now(),
        }
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 322);

        for entry in CATALOG {
            assert!(!entry.key.is_empty());
            assert!(
                entry.key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
                "unexpected key: {}",
                entry.key
            );
            if let Fixed(text) = entry.value {
                assert!(!text.is_empty(), "empty value for {}", entry.key);
                assert!(!text.contains('&'), "'&' in value for {}", entry.key);
            }
        }
    }

    #[test]
    fn test_catalog_keeps_duplicate_keys() {
        let connection_types = CATALOG
            .iter()
            .filter(|entry| entry.key == "connection_type")
            .count();
        assert_eq!(connection_types, 2);
    }

    #[test]
    fn test_timestamp_formats() {
        let now = pacific_time();

        assert_eq!(UnixSeconds.render(&now), "1705357425");
        assert_eq!(UnixMillis.render(&now), "1705357425000");
        assert_eq!(Rfc3339.render(&now), "2024-01-15T14:23:45-08:00");
        assert_eq!(Rfc3339.render(&now.with_timezone(&Utc)), "2024-01-15T22:23:45Z");
        assert_eq!(Rfc1123Utc.render(&now), "Mon, 15 Jan 2024 22:23:45 UTC");
        assert_eq!(Rfc1123Offset.render(&now), "Mon, 15 Jan 2024 14:23:45 -0800");
    }

    #[test]
    fn test_subsecond_timestamp_drops_trailing_zeros() {
        let now = pacific_time();
        assert_eq!(Rfc3339Subsec.render(&now), "2024-01-15T14:23:45-08:00");

        let millis = now.with_nanosecond(250_000_000).unwrap();
        assert_eq!(Rfc3339Subsec.render(&millis), "2024-01-15T14:23:45.25-08:00");

        let micros = now.with_nanosecond(1_200_000).unwrap();
        assert_eq!(Rfc3339Subsec.render(&micros), "2024-01-15T14:23:45.0012-08:00");

        let nanos = now.with_nanosecond(123_456_789).unwrap();
        assert_eq!(Rfc3339Subsec.render(&nanos), "2024-01-15T14:23:45.123456789-08:00");

        let utc = millis.with_timezone(&Utc);
        assert_eq!(Rfc3339Subsec.render(&utc), "2024-01-15T22:23:45.25Z");
    }

    #[test]
    fn test_render_derived_entries() {
        let hash = hash::sha256_hex("https://example.com");
        let ctx = context("https://example.com", &hash);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            entry("original_url_encoded", OriginalUrlBase64).render(&ctx, &mut rng),
            "original_url_encoded=aHR0cHM6Ly9leGFtcGxlLmNvbQ=="
        );
        assert_eq!(
            entry("url_hash", UrlHash).render(&ctx, &mut rng),
            format!("url_hash={}", hash)
        );
        assert_eq!(
            entry("payload", PayloadBase64).render(&ctx, &mut rng),
            "payload=bWVhbmluZ2xlc3MtcGF5bG9hZC1kYXRh"
        );
        assert_eq!(
            fixed("hsts", "enforced-strict-transport-security").render(&ctx, &mut rng),
            "hsts=enforced-strict-transport-security"
        );
    }

    #[test]
    fn test_render_all_matches_catalog() {
        let hash = hash::sha256_hex("http://example.com/path?query=value");
        let ctx = context("http://example.com/path?query=value", &hash);
        let mut rng = StdRng::seed_from_u64(99);

        let rendered = render_all(&ctx, &mut rng);
        assert_eq!(rendered.len(), CATALOG.len());

        for (entry, param) in CATALOG.iter().zip(&rendered) {
            assert!(entry.accepts(param, &ctx), "{} does not render as {:?}", param, entry);
            assert!(!param.contains('&'), "'&' in {}", param);
        }
    }

    #[test]
    fn test_session_id_format() {
        let hash = hash::sha256_hex("https://example.com");
        let ctx = context("https://example.com", &hash);
        let mut rng = StdRng::seed_from_u64(5);

        let session = CATALOG
            .iter()
            .find(|entry| entry.key == "session_id")
            .unwrap()
            .render(&ctx, &mut rng);
        let token = session.strip_prefix("session_id=").unwrap();
        assert!(id_generator::is_random_id(token, 32));
    }

    #[test]
    fn test_is_catalog_param_rejects_strangers() {
        let hash = hash::sha256_hex("https://example.com");
        let ctx = context("https://example.com", &hash);

        assert!(is_catalog_param("hsts=enforced-strict-transport-security", &ctx));
        assert!(!is_catalog_param("hsts=disabled", &ctx));
        assert!(!is_catalog_param("session_id=TOO-SHORT", &ctx));
        assert!(!is_catalog_param("favorite_color=blue", &ctx));
        assert!(!is_catalog_param("url_hash=deadbeef", &ctx));
    }
}
