use std::net::{Ipv4Addr, Ipv6Addr};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }

    /// RFC 7505: an empty or root exchange means the domain accepts no mail.
    pub fn is_null(&self) -> bool {
        self.exchange.is_empty() || self.exchange == "."
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Mx,
    A,
    Aaaa,
}

/// One answer from the combined MX + A + AAAA query, in answer order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    Mx(MxRecord),
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
}

impl DnsRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Mx(_) => RecordKind::Mx,
            Self::A(_) => RecordKind::A,
            Self::Aaaa(_) => RecordKind::Aaaa,
        }
    }

    pub fn mx(preference: u16, exchange: impl Into<String>) -> Self {
        Self::Mx(MxRecord::new(preference, exchange))
    }
}
