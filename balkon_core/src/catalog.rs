//! # Stock Catalogue
//!
//! Every item the engine can put on a bill of materials, keyed by an
//! exhaustive enum instead of free-form strings. Stock codes carry the
//! eloksal (4447) color suffix; [`ProfileColor::apply`] swaps it for the
//! selected finish when a price layer needs the colored code.
//!
//! ## Example
//!
//! ```rust
//! use balkon_core::catalog::{Category, ProfileColor, StockItem};
//!
//! let rail = StockItem::RailProfile;
//! assert_eq!(rail.code(), "357014_4447_0");
//! assert_eq!(rail.category(), Category::Profile);
//! assert_eq!(ProfileColor::Antrasit.apply(rail.code()), "357014_4441_0");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Bill-of-materials category. Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Hardware and small parts, counted in pieces
    Accessory,
    /// Extruded aluminium profiles and seals, measured in metres
    Profile,
    /// Glass panes, measured in square metres
    Glass,
}

impl Category {
    /// Heading used on printed lists
    pub fn label(&self) -> &'static str {
        match self {
            Category::Accessory => "Aksesuar",
            Category::Profile => "Aluminyum Malzemeler",
            Category::Glass => "Cam",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Catalogue items produced by the BOM contributors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockItem {
    /// Bottom/top rail with gasket, cut per arm
    RailProfile,
    /// Outer side profile with tab
    SideTabProfile,
    /// Lock profile on exit sashes
    LockProfile,
    /// Inner telescoping profile, outer half
    TelescopingOuter,
    /// Inner telescoping profile, inner half
    TelescopingInner,
    /// Passive corner-turn profile
    CornerPassive,
    /// Active corner-turn profile
    CornerActive,
    /// Corner-turn tube
    CornerTube,
    /// Between-sash cap profile
    SashCapProfile,
    /// Wing (sash) profile, cut per pane
    WingProfile,
    /// Horizontal brush seal 4.8×10
    BrushSealHorizontal,
    /// Vertical brush seal 4.8×550
    BrushSealVertical,
    /// Corner wedge
    CornerWedge,
    /// Roller set
    RollerSet,
    /// Bakla-5 link
    Bakla5,
    /// Hinged wing set
    HingedWingSet,
    /// Hinge wing holder
    HingeHolder,
    /// Espagnolette latch kit
    LatchKit,
    /// Espagnolette pin set
    PinSet,
    /// End cap
    Cap,
    /// Zamak corner-turn fitting
    ZamakCorner,
}

impl StockItem {
    /// Stock code as listed in the price table (eloksal finish)
    pub fn code(&self) -> &'static str {
        match self {
            StockItem::RailProfile => "357014_4447_0",
            StockItem::SideTabProfile => "357012_4447_0",
            StockItem::LockProfile => "356628_4447_0",
            StockItem::TelescopingOuter => "356646_4447_0_DIS",
            StockItem::TelescopingInner => "356646_4447_0_IC",
            StockItem::CornerPassive => "356650_4447_0",
            StockItem::CornerActive => "356649_4447_0",
            StockItem::CornerTube => "356739_4447_0",
            StockItem::SashCapProfile => "356645_7072_0",
            StockItem::WingProfile => "357001_4447_0",
            StockItem::BrushSealHorizontal => "19737_256_0",
            StockItem::BrushSealVertical => "12963_256_0",
            StockItem::CornerWedge => "356860_429",
            StockItem::RollerSet => "356855_0",
            StockItem::Bakla5 => "356865_0_0",
            StockItem::HingedWingSet => "356819_429_0",
            StockItem::HingeHolder => "356985_256",
            StockItem::LatchKit => "356902_0",
            StockItem::PinSet => "356987_0",
            StockItem::Cap => "356979_0",
            StockItem::ZamakCorner => "356922_0_0",
        }
    }

    /// Catalogue description
    pub fn description(&self) -> &'static str {
        match self {
            StockItem::RailProfile => "RAY PROFILI-CONTALI",
            StockItem::SideTabProfile => "YAN PROFIL TIRNAKLI",
            StockItem::LockProfile => "KILIT PR-24",
            StockItem::TelescopingOuter => "IÇ IÇE PROFIL ( DIS )",
            StockItem::TelescopingInner => "IÇ IÇE PROFIL ( IÇ )",
            StockItem::CornerPassive => "KÖSE DÖNÜS PASIF PRO",
            StockItem::CornerActive => "KÖSE DÖNÜS AKTIF PRO",
            StockItem::CornerTube => "KOSE DONUS BORU",
            StockItem::SashCapProfile => "ARA KANAT KAPAK PROF",
            StockItem::WingProfile => "KANAT PROFILI-24",
            StockItem::BrushSealHorizontal => "FIRÇA CONTA-4.8*10",
            StockItem::BrushSealVertical => "FIRÇA CONTA-4.8*550",
            StockItem::CornerWedge => "KÖŞE TAKOZU",
            StockItem::RollerSet => "TEKERLEK SETİ",
            StockItem::Bakla5 => "BAKLA-5",
            StockItem::HingedWingSet => "MENTEŞELİ KANAT TAKIMI",
            StockItem::HingeHolder => "MENTEŞE-KANAT TUTUCU",
            StockItem::LatchKit => "ECO BELLA ISP.KIT",
            StockItem::PinSet => "İSPANYOLET PİM SETİ",
            StockItem::Cap => "TAPA",
            StockItem::ZamakCorner => "ZAMAK KOSE DONUS",
        }
    }

    /// Category the item is listed under
    pub fn category(&self) -> Category {
        match self {
            StockItem::CornerWedge
            | StockItem::RollerSet
            | StockItem::Bakla5
            | StockItem::HingedWingSet
            | StockItem::HingeHolder
            | StockItem::LatchKit
            | StockItem::PinSet
            | StockItem::Cap
            | StockItem::ZamakCorner => Category::Accessory,
            _ => Category::Profile,
        }
    }

    /// Items cut piece by piece: installers need every cut on its own row,
    /// so the aggregator never merges them.
    pub fn is_cut_individually(&self) -> bool {
        matches!(self, StockItem::RailProfile | StockItem::WingProfile)
    }

    /// Look an item up by its stock code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.code() == code)
    }

    /// Every catalogue item
    pub const ALL: [StockItem; 21] = [
        StockItem::RailProfile,
        StockItem::SideTabProfile,
        StockItem::LockProfile,
        StockItem::TelescopingOuter,
        StockItem::TelescopingInner,
        StockItem::CornerPassive,
        StockItem::CornerActive,
        StockItem::CornerTube,
        StockItem::SashCapProfile,
        StockItem::WingProfile,
        StockItem::BrushSealHorizontal,
        StockItem::BrushSealVertical,
        StockItem::CornerWedge,
        StockItem::RollerSet,
        StockItem::Bakla5,
        StockItem::HingedWingSet,
        StockItem::HingeHolder,
        StockItem::LatchKit,
        StockItem::PinSet,
        StockItem::Cap,
        StockItem::ZamakCorner,
    ];
}

/// Aluminium finish. Each finish has a four-digit code embedded in the
/// stock codes of colored profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileColor {
    /// Anodized (default)
    #[default]
    Eloksal,
    /// Bronze
    Bronz,
    /// Anthracite
    Antrasit,
    /// Custom RAL powder coat
    Ral,
}

impl ProfileColor {
    /// Every finish, in suffix lookup order
    pub const ALL: [ProfileColor; 4] = [
        ProfileColor::Eloksal,
        ProfileColor::Bronz,
        ProfileColor::Antrasit,
        ProfileColor::Ral,
    ];

    /// Parse a free-form color label ("Eloksal Gümüş", "RAL 7016", ...);
    /// anything unrecognized is eloksal.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("eloksal") {
            ProfileColor::Eloksal
        } else if lower.contains("bronz") {
            ProfileColor::Bronz
        } else if lower.contains("antrasit") {
            ProfileColor::Antrasit
        } else if lower.contains("ral") {
            ProfileColor::Ral
        } else {
            ProfileColor::Eloksal
        }
    }

    /// Color code embedded in stock codes
    pub fn suffix(&self) -> &'static str {
        match self {
            ProfileColor::Eloksal => "4447",
            ProfileColor::Bronz => "4440",
            ProfileColor::Antrasit => "4441",
            ProfileColor::Ral => "7072",
        }
    }

    /// Replace the first color code found in `stock_code` with this finish's.
    /// Codes without a color code are returned unchanged.
    pub fn apply(&self, stock_code: &str) -> String {
        let current = Self::ALL
            .iter()
            .map(|color| color.suffix())
            .find(|suffix| stock_code.contains(suffix));
        match current {
            Some(suffix) => stock_code.replacen(suffix, self.suffix(), 1),
            None => stock_code.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for ProfileColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(ProfileColor::from_label).unwrap_or_default())
    }
}
