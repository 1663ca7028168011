use std::net::SocketAddr;

use crate::utils::error::{DiagramError, Result};

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;

    /// 解析 host 與 port，支援 hostname (例如 localhost) 與 IPv6 位址
    fn socket_addr(&self) -> Result<SocketAddr> {
        use std::net::ToSocketAddrs;

        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| DiagramError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: self.host().to_string(),
                reason: "Host did not resolve to any address".to_string(),
            })
    }
}
