//! Static site metadata shared by the shell and the pages.

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub contact_email: &'static str,
}

pub const CONFIG: SiteConfig = SiteConfig {
    name: "Northwind Studio",
    tagline: "Design and engineering for teams that ship",
    description: "Northwind Studio builds web experiences, products and infrastructure for growing teams.",
    base_url: "https://northwind.studio",
    contact_email: "hello@northwind.studio",
};
