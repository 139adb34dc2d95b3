//! Rewrites upstream media and thumbnail URLs to pass through our proxy
//! endpoints, hiding the true origins from the client. Each class of URL is
//! gated by its own config flag; with the flag off the URL goes out as-is.

pub fn image_proxy_url(public_base: &str, url: &str, use_proxy: bool) -> String {
    if use_proxy && !url.is_empty() {
        format!(
            "{}/proxy/image?url={}",
            public_base.trim_end_matches('/'),
            urlencoding::encode(url)
        )
    } else {
        url.to_string()
    }
}

pub fn video_proxy_url(public_base: &str, url: &str, use_proxy: bool) -> String {
    if use_proxy && !url.is_empty() {
        format!(
            "{}/proxy/video?url={}",
            public_base.trim_end_matches('/'),
            urlencoding::encode(url)
        )
    } else {
        url.to_string()
    }
}
