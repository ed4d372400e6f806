use derive_more::Display;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Page {
    #[display(fmt = "Dashboard")]
    Dashboard,
    #[display(fmt = "Pemrosesan Citra")]
    ImageProcessing,
    #[display(fmt = "Tentang")]
    About,
}

/// Navigation key carried by nav links and dashboard buttons, paired with its page.
pub const NAV_TABLE: [(&str, Page); 3] = [
    ("dashboard", Page::Dashboard),
    ("image-processing", Page::ImageProcessing),
    ("about", Page::About),
];

impl Page {
    pub const DEFAULT: Page = Page::Dashboard;

    pub fn from_nav_key(key: &str) -> Option<Page> {
        NAV_TABLE
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, page)| *page)
    }

    pub fn nav_key(self) -> &'static str {
        NAV_TABLE
            .iter()
            .find(|(_, page)| *page == self)
            .map(|(k, _)| *k)
            .unwrap_or("dashboard")
    }

    /// DOM id of the section that renders this page.
    pub fn element_id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboardPage",
            Page::ImageProcessing => "imageProcessingPage",
            Page::About => "aboutPage",
        }
    }
}
