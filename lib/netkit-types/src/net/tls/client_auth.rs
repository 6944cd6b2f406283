/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;

use super::TlsVersion;

pub type TlsCertSelector = Arc<dyn Fn(&[String]) -> Option<usize> + Send + Sync>;

/// Client side mutual-TLS settings, consumed by a TLS connector layer.
///
/// This only holds configuration. Certificates are kept as raw DER blobs so
/// no TLS backend is pulled in here.
#[derive(Clone, Default)]
pub struct TlsClientAuthConfig {
    protocol: Option<TlsVersion>,
    client_certs: Vec<Vec<u8>>,
    check_certificate_revocation: bool,
    cert_selector: Option<TlsCertSelector>,
}

impl fmt::Debug for TlsClientAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsClientAuthConfig")
            .field("protocol", &self.protocol)
            .field("client_certs", &self.client_certs.len())
            .field(
                "check_certificate_revocation",
                &self.check_certificate_revocation,
            )
            .field("cert_selector", &self.cert_selector.is_some())
            .finish()
    }
}

impl TlsClientAuthConfig {
    pub fn set_protocol(&mut self, protocol: TlsVersion) {
        self.protocol = Some(protocol);
    }

    #[inline]
    pub fn protocol(&self) -> Option<TlsVersion> {
        self.protocol
    }

    pub fn add_client_cert(&mut self, der: Vec<u8>) {
        self.client_certs.push(der);
    }

    #[inline]
    pub fn client_certs(&self) -> &[Vec<u8>] {
        &self.client_certs
    }

    pub fn set_check_certificate_revocation(&mut self, enable: bool) {
        self.check_certificate_revocation = enable;
    }

    #[inline]
    pub fn check_certificate_revocation(&self) -> bool {
        self.check_certificate_revocation
    }

    pub fn set_cert_selector<F>(&mut self, selector: F)
    where
        F: Fn(&[String]) -> Option<usize> + Send + Sync + 'static,
    {
        self.cert_selector = Some(Arc::new(selector));
    }

    pub fn check(&self) -> anyhow::Result<()> {
        if self.cert_selector.is_some() && self.client_certs.is_empty() {
            return Err(anyhow!(
                "certificate selector set but no client certificate loaded"
            ));
        }
        Ok(())
    }

    /// Pick the client certificate to present, given the acceptable issuer
    /// names the server advertised. Falls back to the first certificate when
    /// no selector is set.
    pub fn select_cert(&self, acceptable_issuers: &[String]) -> Option<&[u8]> {
        let index = match &self.cert_selector {
            Some(selector) => selector(acceptable_issuers)?,
            None => 0,
        };
        self.client_certs.get(index).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_default_first() {
        let mut config = TlsClientAuthConfig::default();
        assert!(config.select_cert(&[]).is_none());

        config.add_client_cert(vec![0x30, 0x82]);
        config.add_client_cert(vec![0x30, 0x81]);
        assert_eq!(config.select_cert(&[]), Some(&[0x30, 0x82][..]));
    }

    #[test]
    fn select_with_callback() {
        let mut config = TlsClientAuthConfig::default();
        config.add_client_cert(vec![1]);
        config.add_client_cert(vec![2]);
        config.set_cert_selector(|issuers| {
            issuers
                .iter()
                .position(|n| n.contains("Example CA"))
                .map(|_| 1)
        });
        assert!(config.check().is_ok());

        assert_eq!(
            config.select_cert(&["CN=Example CA".to_string()]),
            Some(&[2u8][..])
        );
        assert!(config.select_cert(&["CN=Other".to_string()]).is_none());
    }

    #[test]
    fn check_selector_without_certs() {
        let mut config = TlsClientAuthConfig::default();
        config.set_cert_selector(|_| Some(0));
        assert!(config.check().is_err());
    }
}
