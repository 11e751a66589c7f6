use phf::phf_map;

/// A popular mailbox provider: the top-level names it is served under and
/// the ways people mistype its name.
#[derive(Debug, Clone, Copy)]
pub struct ProviderSeed {
    pub tlds: &'static [&'static str],
    pub misspellings: &'static [&'static str],
}

/// Provider label -> seed.
pub type ProviderSeeds = phf::Map<&'static str, ProviderSeed>;

/// Canonical top-level name -> common misspellings of it.
pub type TldSeeds = phf::Map<&'static str, &'static [&'static str]>;

pub static PROVIDER_SEEDS: ProviderSeeds = phf_map! {
    "gmail" => ProviderSeed {
        tlds: &["com"],
        misspellings: &[
            "gamil", "gmial", "gmal", "gmai", "gnail", "gmaill", "gmali", "gmil",
            "gemail", "gmaik", "gmsil", "gmeil", "gail", "gmaul", "fmail", "hmail",
            "gmaiil", "ggmail",
        ],
    },
    "googlemail" => ProviderSeed {
        tlds: &["com"],
        misspellings: &["googlemial", "googlemal", "goglemail", "gogglemail", "googlmail"],
    },
    "hotmail" => ProviderSeed {
        tlds: &["com", "co.uk", "fr"],
        misspellings: &[
            "hotmial", "hotmal", "hotmai", "hotmil", "hotmaill", "hotamil", "hormail",
            "hotmaik", "hitmail", "homail", "htomail", "hotnail", "hotmsil",
        ],
    },
    "outlook" => ProviderSeed {
        tlds: &["com"],
        misspellings: &["outlok", "outloo", "outlookk", "otulook", "oulook", "outllok", "outlool", "outook"],
    },
    "live" => ProviderSeed {
        tlds: &["com", "co.uk"],
        misspellings: &["livee", "lve", "livr"],
    },
    "yahoo" => ProviderSeed {
        tlds: &["com", "co.uk", "fr"],
        misspellings: &["yaho", "yahho", "yhaoo", "yahooo", "yaoo", "yhoo", "yajoo", "tahoo", "yahou"],
    },
    "icloud" => ProviderSeed {
        tlds: &["com"],
        misspellings: &["iclould", "icoud", "iclod", "icluod", "iclud", "icloude", "icould"],
    },
    "aol" => ProviderSeed {
        tlds: &["com"],
        misspellings: &["aoll", "aool"],
    },
    "protonmail" => ProviderSeed {
        tlds: &["com"],
        misspellings: &["protonmial", "protonmal", "protonmai", "protomail", "protonmil"],
    },
    "msn" => ProviderSeed {
        tlds: &["com"],
        misspellings: &["mns", "msnn"],
    },
};

pub static TLD_SEEDS: TldSeeds = phf_map! {
    "com" => &["cmo", "con", "ocm", "comm", "cpm", "vom", "xom", "coom", "c0m", "cim", "clm", "comn"],
    "co.uk" => &["co.ik", "co.uj", "c.uk", "co.ukk", "cou.k", "co.um"],
    "fr" => &["frr", "fe"],
};
