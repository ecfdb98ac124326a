//! Menu (菜单)
//!
//! Four fixed categories shown as tabs; `mains` is selected by default.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AppError, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    /// Display price, e.g. `LKR 1,800`
    pub price: &'static str,
    pub popular: bool,
}

const fn item(
    name: &'static str,
    description: &'static str,
    price: &'static str,
    popular: bool,
) -> MenuItem {
    MenuItem {
        name,
        description,
        price,
        popular,
    }
}

const BREAKFAST: [MenuItem; 5] = [
    item("Egg Hoppers", "Traditional crispy rice flour bowl with soft egg center", "LKR 650", true),
    item("String Hoppers", "Steamed rice noodle nests with pol sambol", "LKR 550", false),
    item("Fresh Fruit Platter", "Seasonal tropical fruits with honey drizzle", "LKR 850", false),
    item("King Coconut Smoothie", "Fresh king coconut, banana & passion fruit", "LKR 600", true),
    item("Sri Lankan Breakfast", "Hoppers, dhal curry, sambol trio & fresh juice", "LKR 1,200", false),
];

const STARTERS: [MenuItem; 5] = [
    item("Pol Sambol", "Fresh coconut with chili, lime & Maldive fish", "LKR 450", false),
    item("Isso Vadai", "Crispy prawn & lentil fritters with curry leaves", "LKR 850", true),
    item("Fresh Ceviche", "Today's catch with citrus, coconut & kochchi", "LKR 1,200", false),
    item("Devilled Calamari", "Wok-tossed squid with bell peppers & spices", "LKR 1,100", false),
    item("Fish Cutlets", "Traditional spiced fish patties with date chutney", "LKR 750", false),
];

const MAINS: [MenuItem; 6] = [
    item("Ambul Thiyal", "Sour fish curry - Tangalle style with goraka", "LKR 1,800", true),
    item("Black Pork Curry", "Slow-cooked in roasted spices & kithul treacle", "LKR 2,200", false),
    item("Grilled Lobster", "Fresh Mirissa lobster with garlic butter & herbs", "LKR 3,500", true),
    item("Kottu Roti", "Chopped roti with vegetables, egg & your choice of protein", "LKR 1,400", false),
    item("Lamprais", "Dutch-Lankan rice parcel with frikkadels & ash plantain", "LKR 1,600", false),
    item("Seafood Rice", "Fragrant rice with prawns, calamari & crab meat", "LKR 2,400", false),
];

const DRINKS: [MenuItem; 6] = [
    item("Sunset Arrack Sour", "Ceylon arrack, passion fruit, lime & aromatic bitters", "LKR 1,200", true),
    item("Passionfruit Mojito", "White rum, fresh passion fruit, mint & lime", "LKR 1,100", false),
    item("Coconut Martini", "Vodka, coconut cream, pineapple & vanilla", "LKR 1,300", false),
    item("Mirissa Mule", "Ginger-infused arrack, lime & ginger beer", "LKR 1,000", true),
    item("Tropical Sangria", "Red wine, exotic fruits & spiced rum", "LKR 950", false),
    item("Fresh Seafood Martini", "Gin, cucumber, dill & oyster essence", "LKR 1,400", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Breakfast,
    Starters,
    Mains,
    Drinks,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Breakfast,
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Drinks,
    ];

    /// Tab selected when none (or an unknown one) is requested
    pub const DEFAULT: MenuCategory = MenuCategory::Mains;

    pub const fn id(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "breakfast",
            MenuCategory::Starters => "starters",
            MenuCategory::Mains => "mains",
            MenuCategory::Drinks => "drinks",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "Breakfast",
            MenuCategory::Starters => "Starters",
            MenuCategory::Mains => "Signature Mains",
            MenuCategory::Drinks => "Cocktails",
        }
    }

    /// Featured image file under the assets directory
    pub const fn image(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "breakfast-hoppers.jpg",
            MenuCategory::Starters | MenuCategory::Mains => "seafood-dish.jpg",
            MenuCategory::Drinks => "cocktail-sunset.jpg",
        }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        match self {
            MenuCategory::Breakfast => &BREAKFAST,
            MenuCategory::Starters => &STARTERS,
            MenuCategory::Mains => &MAINS,
            MenuCategory::Drinks => &DRINKS,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Page tab selection: unknown or missing ids fall back to [`Self::DEFAULT`]
    pub fn select(id: Option<&str>) -> Self {
        id.and_then(Self::from_id).unwrap_or(Self::DEFAULT)
    }

    pub fn section(&self) -> MenuSection {
        MenuSection {
            id: self.id(),
            label: self.label(),
            image: self.image(),
            item_count: self.items().len(),
            items: self.items(),
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MenuCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MenuCategoryNotFound,
                format!("Menu category not found: {s}"),
            )
            .with_detail("category", s)
        })
    }
}

/// Serialisable view of one tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub id: &'static str,
    pub label: &'static str,
    pub image: &'static str,
    pub item_count: usize,
    pub items: &'static [MenuItem],
}

pub fn all_sections() -> Vec<MenuSection> {
    MenuCategory::ALL.iter().map(MenuCategory::section).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sizes() {
        let sizes: Vec<_> = MenuCategory::ALL.iter().map(|c| c.items().len()).collect();
        assert_eq!(sizes, vec![5, 5, 6, 6]);
    }

    #[test]
    fn test_select_defaults_to_mains() {
        assert_eq!(MenuCategory::select(None), MenuCategory::Mains);
        assert_eq!(MenuCategory::select(Some("desserts")), MenuCategory::Mains);
        assert_eq!(MenuCategory::select(Some("drinks")), MenuCategory::Drinks);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "desserts".parse::<MenuCategory>().unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuCategoryNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_section_view() {
        let section = MenuCategory::Mains.section();
        assert_eq!(section.label, "Signature Mains");
        assert_eq!(section.item_count, 6);
        assert_eq!(section.items[2].name, "Grilled Lobster");
        assert!(section.items[2].popular);
    }

    #[test]
    fn test_prices_are_lkr() {
        for section in all_sections() {
            assert!(section.items.iter().all(|i| i.price.starts_with("LKR ")));
        }
    }
}
