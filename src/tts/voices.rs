use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Korean voices the dashboard offers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    #[serde(rename = "ko-KR-Standard-A")]
    StandardA,
    #[serde(rename = "ko-KR-Standard-B")]
    StandardB,
    #[serde(rename = "ko-KR-Standard-C")]
    StandardC,
    #[serde(rename = "ko-KR-Standard-D")]
    StandardD,
    #[default]
    #[serde(rename = "ko-KR-Wavenet-A")]
    WavenetA,
    #[serde(rename = "ko-KR-Wavenet-B")]
    WavenetB,
    #[serde(rename = "ko-KR-Wavenet-C")]
    WavenetC,
    #[serde(rename = "ko-KR-Wavenet-D")]
    WavenetD,
    #[serde(rename = "ko-KR-Neural2-A")]
    Neural2A,
    #[serde(rename = "ko-KR-Neural2-B")]
    Neural2B,
    #[serde(rename = "ko-KR-Neural2-C")]
    Neural2C,
}

impl Voice {
    pub const ALL: [Voice; 11] = [
        Voice::StandardA,
        Voice::StandardB,
        Voice::StandardC,
        Voice::StandardD,
        Voice::WavenetA,
        Voice::WavenetB,
        Voice::WavenetC,
        Voice::WavenetD,
        Voice::Neural2A,
        Voice::Neural2B,
        Voice::Neural2C,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Voice::StandardA => "ko-KR-Standard-A",
            Voice::StandardB => "ko-KR-Standard-B",
            Voice::StandardC => "ko-KR-Standard-C",
            Voice::StandardD => "ko-KR-Standard-D",
            Voice::WavenetA => "ko-KR-Wavenet-A",
            Voice::WavenetB => "ko-KR-Wavenet-B",
            Voice::WavenetC => "ko-KR-Wavenet-C",
            Voice::WavenetD => "ko-KR-Wavenet-D",
            Voice::Neural2A => "ko-KR-Neural2-A",
            Voice::Neural2B => "ko-KR-Neural2-B",
            Voice::Neural2C => "ko-KR-Neural2-C",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Voice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|v| v.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown voice: {}", s))
    }
}
