//! Tractates (masechtos) of the Jerusalem Talmud in Daf Yomi study order.
//!
//! The position of a tractate in [`ALL_MASECHTOS`] is its volume index;
//! [`PAGES_PER_MASECHTA`] holds the page count at the same position.

/// Total pages in one pass over the Jerusalem Talmud.
pub const WHOLE_SHAS_PAGES: u32 = 1554;

/// Number of tractates.
pub const MASECHTA_COUNT: usize = 39;

/// Tractates of the Jerusalem Talmud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Masechta {
    Berachos,
    Peah,
    Demai,
    Kilayim,
    Sheviis,
    Terumos,
    Maasros,
    MaaserSheni,
    Chalah,
    Orlah,
    Bikurim,
    Shabbos,
    Eruvin,
    Pesachim,
    Beitzah,
    RoshHashanah,
    Yoma,
    Sukkah,
    Taanis,
    Shekalim,
    Megillah,
    MoedKatan,
    Chagigah,
    Yevamos,
    Kesubos,
    Sotah,
    Nedarim,
    Nazir,
    Gitin,
    Kidushin,
    BavaKamma,
    BavaMetzia,
    BavaBasra,
    Shevuos,
    Makos,
    Sanhedrin,
    AvodahZarah,
    Horiyos,
    Niddah,
}

/// All tractates in study order (index 0 = Berachos).
pub const ALL_MASECHTOS: [Masechta; MASECHTA_COUNT] = [
    Masechta::Berachos,
    Masechta::Peah,
    Masechta::Demai,
    Masechta::Kilayim,
    Masechta::Sheviis,
    Masechta::Terumos,
    Masechta::Maasros,
    Masechta::MaaserSheni,
    Masechta::Chalah,
    Masechta::Orlah,
    Masechta::Bikurim,
    Masechta::Shabbos,
    Masechta::Eruvin,
    Masechta::Pesachim,
    Masechta::Beitzah,
    Masechta::RoshHashanah,
    Masechta::Yoma,
    Masechta::Sukkah,
    Masechta::Taanis,
    Masechta::Shekalim,
    Masechta::Megillah,
    Masechta::MoedKatan,
    Masechta::Chagigah,
    Masechta::Yevamos,
    Masechta::Kesubos,
    Masechta::Sotah,
    Masechta::Nedarim,
    Masechta::Nazir,
    Masechta::Gitin,
    Masechta::Kidushin,
    Masechta::BavaKamma,
    Masechta::BavaMetzia,
    Masechta::BavaBasra,
    Masechta::Shevuos,
    Masechta::Makos,
    Masechta::Sanhedrin,
    Masechta::AvodahZarah,
    Masechta::Horiyos,
    Masechta::Niddah,
];

/// Page count of each tractate, aligned with [`ALL_MASECHTOS`].
#[rustfmt::skip]
pub const PAGES_PER_MASECHTA: [u32; MASECHTA_COUNT] = [
    68, 37, 34, 44, 31, 59, 26, 33, 28, 20,
    13, 92, 65, 71, 22, 22, 42, 26, 26, 33,
    34, 22, 19, 85, 72, 47, 40, 47, 54, 48,
    44, 37, 34, 44, 9, 57, 37, 19, 13,
];

const _: () = {
    let mut sum = 0;
    let mut i = 0;
    while i < MASECHTA_COUNT {
        sum += PAGES_PER_MASECHTA[i];
        i += 1;
    }
    assert!(sum == WHOLE_SHAS_PAGES, "page table must cover the whole cycle");
};

impl Masechta {
    /// Transliterated name.
    pub fn name(self) -> &'static str {
        MASECHTA_NAMES[self.index()]
    }

    /// Hebrew name.
    pub fn hebrew_name(self) -> &'static str {
        MASECHTA_HEBREW_NAMES[self.index()]
    }

    /// Number of pages in this tractate.
    pub fn pages(self) -> u32 {
        PAGES_PER_MASECHTA[self.index()]
    }

    /// Tractate at a volume index.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_MASECHTOS.get(index).copied()
    }

    /// 0-based volume index (Berachos=0 .. Niddah=38).
    pub const fn index(self) -> usize {
        match self {
            Self::Berachos => 0,
            Self::Peah => 1,
            Self::Demai => 2,
            Self::Kilayim => 3,
            Self::Sheviis => 4,
            Self::Terumos => 5,
            Self::Maasros => 6,
            Self::MaaserSheni => 7,
            Self::Chalah => 8,
            Self::Orlah => 9,
            Self::Bikurim => 10,
            Self::Shabbos => 11,
            Self::Eruvin => 12,
            Self::Pesachim => 13,
            Self::Beitzah => 14,
            Self::RoshHashanah => 15,
            Self::Yoma => 16,
            Self::Sukkah => 17,
            Self::Taanis => 18,
            Self::Shekalim => 19,
            Self::Megillah => 20,
            Self::MoedKatan => 21,
            Self::Chagigah => 22,
            Self::Yevamos => 23,
            Self::Kesubos => 24,
            Self::Sotah => 25,
            Self::Nedarim => 26,
            Self::Nazir => 27,
            Self::Gitin => 28,
            Self::Kidushin => 29,
            Self::BavaKamma => 30,
            Self::BavaMetzia => 31,
            Self::BavaBasra => 32,
            Self::Shevuos => 33,
            Self::Makos => 34,
            Self::Sanhedrin => 35,
            Self::AvodahZarah => 36,
            Self::Horiyos => 37,
            Self::Niddah => 38,
        }
    }
}

const MASECHTA_NAMES: [&str; MASECHTA_COUNT] = [
    "Berachos",
    "Pe'ah",
    "Demai",
    "Kilayim",
    "Shevi'is",
    "Terumos",
    "Ma'asros",
    "Ma'aser Sheni",
    "Chalah",
    "Orlah",
    "Bikurim",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Beitzah",
    "Rosh Hashanah",
    "Yoma",
    "Sukkah",
    "Ta'anis",
    "Shekalim",
    "Megillah",
    "Moed Katan",
    "Chagigah",
    "Yevamos",
    "Kesubos",
    "Sotah",
    "Nedarim",
    "Nazir",
    "Gitin",
    "Kidushin",
    "Bava Kamma",
    "Bava Metzia",
    "Bava Basra",
    "Shevuos",
    "Makos",
    "Sanhedrin",
    "Avodah Zarah",
    "Horiyos",
    "Niddah",
];

const MASECHTA_HEBREW_NAMES: [&str; MASECHTA_COUNT] = [
    "ברכות",
    "פיאה",
    "דמאי",
    "כלאים",
    "שביעית",
    "תרומות",
    "מעשרות",
    "מעשר שני",
    "חלה",
    "עורלה",
    "ביכורים",
    "שבת",
    "עירובין",
    "פסחים",
    "ביצה",
    "ראש השנה",
    "יומא",
    "סוכה",
    "תענית",
    "שקלים",
    "מגילה",
    "מועד קטן",
    "חגיגה",
    "יבמות",
    "כתובות",
    "סוטה",
    "נדרים",
    "נזיר",
    "גיטין",
    "קידושין",
    "בבא קמא",
    "בבא מציעא",
    "בבא בתרא",
    "שבועות",
    "מכות",
    "סנהדרין",
    "עבודה זרה",
    "הוריות",
    "נדה",
];
