use serde::{Deserialize, Serialize};

use crate::consts::{CODE128_MODULES_PER_CHAR, CODE128_OVERHEAD_MODULES, EAN13_MODULES};

/// Symbology reported by the detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    Code128,
    Code39,
    Code93,
    Codabar,
    DataMatrix,
    Ean13,
    Ean8,
    Itf,
    QrCode,
    UpcA,
    UpcE,
    Pdf417,
    Aztec,
    #[default]
    Unknown,
}

impl BarcodeFormat {
    /// Number of bars a printed symbol is expected to contain, when the
    /// format has a fixed or payload-derived module count.
    pub fn expected_bars(self, value: Option<&str>) -> Option<usize> {
        match self {
            Self::Ean13 | Self::UpcA => Some(EAN13_MODULES),
            // Code 128 length follows the payload, so no payload means no count.
            Self::Code128 => value.map(|v| {
                v.chars().count() * CODE128_MODULES_PER_CHAR + CODE128_OVERHEAD_MODULES
            }),
            _ => None,
        }
    }

    /// Whether the symbology is linear (1D bars) rather than a 2D matrix.
    pub fn is_linear(self) -> bool {
        !matches!(
            self,
            Self::DataMatrix | Self::QrCode | Self::Pdf417 | Self::Aztec
        )
    }
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code128 => write!(f, "Code 128"),
            Self::Code39 => write!(f, "Code 39"),
            Self::Code93 => write!(f, "Code 93"),
            Self::Codabar => write!(f, "Codabar"),
            Self::DataMatrix => write!(f, "Data Matrix"),
            Self::Ean13 => write!(f, "EAN-13"),
            Self::Ean8 => write!(f, "EAN-8"),
            Self::Itf => write!(f, "ITF"),
            Self::QrCode => write!(f, "QR Code"),
            Self::UpcA => write!(f, "UPC-A"),
            Self::UpcE => write!(f, "UPC-E"),
            Self::Pdf417 => write!(f, "PDF417"),
            Self::Aztec => write!(f, "Aztec"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl std::str::FromStr for BarcodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Ok(match key.as_str() {
            "code128" => Self::Code128,
            "code39" => Self::Code39,
            "code93" => Self::Code93,
            "codabar" => Self::Codabar,
            "datamatrix" => Self::DataMatrix,
            "ean13" => Self::Ean13,
            "ean8" => Self::Ean8,
            "itf" => Self::Itf,
            "qr" | "qrcode" => Self::QrCode,
            "upca" => Self::UpcA,
            "upce" => Self::UpcE,
            "pdf417" => Self::Pdf417,
            "aztec" => Self::Aztec,
            "unknown" => Self::Unknown,
            _ => return Err(format!("unknown barcode format '{s}'")),
        })
    }
}
