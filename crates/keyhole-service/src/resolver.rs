use async_trait::async_trait;
use std::net::IpAddr;

/// DNS resolution capability used by the reachability check.
///
/// Returns an address for the host, or `None` when resolution fails.
/// Transport failures and empty answers are indistinguishable here;
/// both reject a submission identically.
#[async_trait]
pub trait HostResolver: Send + Sync + 'static {
    async fn lookup(&self, host: &str) -> Option<IpAddr>;
}

/// Resolver backed by the system's DNS via tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

#[async_trait]
impl HostResolver for DnsResolver {
    async fn lookup(&self, host: &str) -> Option<IpAddr> {
        // lookup_host wants a port; assume 80 unless one is present.
        let target = if host.contains(':') {
            host.to_owned()
        } else {
            format!("{host}:80")
        };

        match tokio::net::lookup_host(target).await {
            Ok(mut addrs) => addrs.next().map(|addr| addr.ip()),
            Err(_) => None,
        }
    }
}

/// Extracts the host portion of a raw URL string: strips a `scheme://`
/// prefix and userinfo, and cuts at the first path, query, or fragment
/// separator. An explicit port is kept for the lookup.
pub(crate) fn host_portion(raw: &str) -> &str {
    let rest = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let rest = match rest.find(['/', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };
    rest.rsplit_once('@').map_or(rest, |(_, host)| host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_passes_through() {
        assert_eq!(host_portion("www.freecodecamp.org"), "www.freecodecamp.org");
    }

    #[test]
    fn scheme_is_stripped() {
        assert_eq!(host_portion("https://example.com"), "example.com");
        assert_eq!(host_portion("ftp://example.com"), "example.com");
    }

    #[test]
    fn path_query_and_fragment_are_cut() {
        assert_eq!(host_portion("example.com/a/b"), "example.com");
        assert_eq!(host_portion("https://example.com/a?q=1"), "example.com");
        assert_eq!(host_portion("example.com?q=1"), "example.com");
        assert_eq!(host_portion("example.com#frag"), "example.com");
    }

    #[test]
    fn port_is_kept() {
        assert_eq!(host_portion("example.com:8080/path"), "example.com:8080");
    }

    #[test]
    fn userinfo_is_stripped() {
        assert_eq!(host_portion("https://user@example.com/p"), "example.com");
    }

    #[test]
    fn garbage_passes_through_for_dns_to_reject() {
        assert_eq!(host_portion("not a url"), "not a url");
        assert_eq!(host_portion(""), "");
    }
}
