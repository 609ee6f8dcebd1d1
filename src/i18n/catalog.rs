// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the PangaLeo site.
//!
//! Embeds every user-facing string of the marketing pages for both supported
//! languages as compile-time static tables. English is the source language
//! and holds every key; Swahili may be partial, and lookups that miss in
//! Swahili fall back to English at resolution time (see
//! [`Dictionary`](super::Dictionary)).
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `builtin_table()`
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Swahili entry to `SW` (a missing one falls back to English)
//! 3. Tag the page element with `data-i18n`, `data-i18n-placeholder` or
//!    `data-i18n-value` carrying the key

use serde::{Deserialize, Serialize};

/// Languages the site can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Sw,
}

/// Language used when the active language lacks a key.
pub const FALLBACK_LANG: Lang = Lang::En;

/// Language shown on a first visit, regardless of the browser locale.
pub const DEFAULT_LANG: Lang = Lang::Sw;

impl Lang {
    /// ISO 639-1 two-letter code, as written to `<html lang>` and storage.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Sw => "sw",
        }
    }

    /// Parse a stored or user-supplied code. Case-sensitive, like the
    /// `data-lang` attributes it is read from.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "sw" => Some(Lang::Sw),
            _ => None,
        }
    }

    /// All supported languages, in selector order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Sw]
    }
}

impl Default for Lang {
    fn default() -> Self {
        DEFAULT_LANG
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = crate::error::SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s)
            .ok_or_else(|| crate::error::SiteError::UnsupportedLanguage(s.to_string()))
    }
}

/// The embedded table for a language.
pub(crate) fn builtin_table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Sw => SW,
    }
}

// ─── English (source language, all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.menu", "Menu"),
    ("nav.about", "About"),
    ("nav.how", "How It Works"),
    ("nav.screens", "Tenant Journey"),
    ("nav.contact", "Contact"),
    ("nav.privacy", "Privacy Policy"),
    ("nav.demo", "Download now"),
    // Hero
    ("hero.eyebrow", "Rental search, solved"),
    ("hero.title", "Find the right rental faster, without the usual stress."),
    (
        "hero.body",
        "PangaLeo removes the friction of house hunting. Verified listings, clear photos, real-time pricing, and availability, plus direct contact with owners and agents — all in one place.",
    ),
    ("hero.cta_primary", "Download now"),
    ("hero.cta_secondary", "See how it works"),
    // Hero stats
    ("stat.one.title", "Client-ready listings"),
    ("stat.one.desc", "Details that answer questions fast."),
    ("stat.two.title", "Owner control"),
    ("stat.two.desc", "Availability updates in real time."),
    ("stat.three.title", "Shared context"),
    ("stat.three.desc", "Notes that keep everyone aligned."),
    // Hero
    ("hero.card", "Modern by design, trusted by owners, and friendly for clients."),
    // Property previews
    ("preview.eyebrow", "Property previews"),
    ("preview.title", "Showcase homes with a premium look."),
    ("preview.body", "High-quality imagery and clear details help clients move with confidence."),
    ("preview.card.one.tag", "New listing"),
    ("preview.card.one.title", "Sunlit 3BR family home"),
    ("preview.card.one.meta", "Dar es Salaam (Kinondoni) • From TZS 850k/mo"),
    ("preview.card.two.tag", "Popular"),
    ("preview.card.two.title", "Modern 2BR city apartment"),
    ("preview.card.two.meta", "Arusha (Njiro) • From TZS 1.2M/mo"),
    ("preview.card.three.tag", "Seaside"),
    ("preview.card.three.title", "Ocean-view villa retreat"),
    ("preview.card.three.meta", "Zanzibar (Stone Town) • From TZS 2.5M/mo"),
    // Why PangaLeo
    ("why.eyebrow", "Why PangaLeo"),
    ("why.title", "Clarity for owners. Confidence for clients."),
    (
        "why.body",
        "Every screen keeps property facts, media, and availability aligned so both sides feel informed.",
    ),
    // Feature grid
    ("feature.one.title", "Client-ready listings"),
    (
        "feature.one.desc",
        "A clean presentation of price, amenities, and media for quick comparisons.",
    ),
    ("feature.two.title", "Owner control panel"),
    ("feature.two.desc", "Update pricing and occupancy instantly without scattered tools."),
    ("feature.three.title", "Trusted collaboration"),
    (
        "feature.three.desc",
        "Comments and notes stay with each property so owners, agents, and teams stay aligned.",
    ),
    ("feature.four.title", "Location clarity"),
    (
        "feature.four.desc",
        "Regions, districts, and ward details are structured for fast discovery.",
    ),
    ("feature.five.title", "Media that builds trust"),
    (
        "feature.five.desc",
        "Image galleries and video previews keep clients confident in what they see.",
    ),
    ("feature.six.title", "Mobile-first performance"),
    ("feature.six.desc", "Designed with Flutter for smooth, responsive experiences on the go."),
    // Workflow
    ("workflow.eyebrow", "Workflow"),
    ("workflow.title", "From owner upload to client decision."),
    (
        "workflow.body",
        "A simple flow that supports owners, teams, and clients in the same workspace.",
    ),
    // Workflow steps
    ("step.one.title", "Owners publish"),
    ("step.one.desc", "Capture pricing, category, amenities, and location details with clarity."),
    ("step.two.title", "Clients explore"),
    ("step.two.desc", "Portrait-first screens make listings easy to scan and compare."),
    ("step.three.title", "Teams close"),
    ("step.three.desc", "Live status and notes keep owners and clients aligned through the lease."),
    // Tenant journey screenshots
    ("screens.eyebrow", "Tenant journey"),
    ("screens.title", "A welcome journey for tenants to find their home."),
    (
        "screens.body",
        "Tenants can browse, compare, and move forward with confidence through a clean portrait-first experience.",
    ),
    ("screens.card.one", "Home discovery"),
    ("screens.card.two", "Client browse"),
    ("screens.card.three", "Listing detail"),
    ("screens.card.four", "Register & connect"),
    // Trust and privacy
    ("trust.eyebrow", "Trust and privacy"),
    ("trust.title", "Designed for confidence and accountability."),
    (
        "trust.body",
        "PangaLeo respects your data. Listings stay organized, access is controlled, and privacy protects both owners and clients.",
    ),
    ("trust.one.title", "Purposeful data"),
    ("trust.one.desc", "We collect only what keeps properties accurate and current."),
    ("trust.two.title", "Transparent updates"),
    ("trust.two.desc", "Every property status change is intentional and visible."),
    ("trust.three.title", "Privacy-first mindset"),
    ("trust.three.desc", "Policies are clear and easy to read, with no surprises."),
    // Call to action
    ("cta.title", "Download PangaLeo and start exploring homes today."),
    ("cta.body", "The app is live on Google Play with curated listings and live updates."),
    ("cta.button", "Download now"),
    // Footer
    (
        "footer.tagline",
        "A modern property platform built for owners, clients, and confident decisions.",
    ),
    ("footer.company", "Company"),
    ("footer.explore", "Explore"),
    ("footer.contact", "Contact"),
    ("footer.email", "Email us"),
    ("footer.whatsapp", "WhatsApp"),
    ("footer.phone", "Call us"),
    ("footer.download", "Download now"),
    // WhatsApp greeting (URL-encoded into wa.me links)
    ("whatsapp.message", "Hello PangaLeo team, I need help finding a rental."),
    // Side contact form
    ("sideform.title", "Send a message"),
    // Contact form fields and status lines
    ("form.status.sending", "Sending..."),
    ("form.status.success", "Message sent. We will reply soon."),
    ("form.status.fail", "Message failed. Please try again."),
    ("form.status.missing", "Email service not configured yet."),
    // Footer
    ("footer.copy_prefix", "©"),
    ("footer.copy_suffix", "PangaLeo. All rights reserved."),
    // About page
    ("about.eyebrow", "About PangaLeo"),
    ("about.title", "Built for owners and the clients they serve."),
    ("about.body", "PangaLeo keeps listings, occupancy, and collaboration in one calm workspace."),
    ("about.focus.title", "Our focus"),
    (
        "about.focus.body",
        "PangaLeo makes property operations feel lightweight and intuitive. Owners get live control, clients get clarity, and teams stay aligned without jumping between tools.",
    ),
    ("about.believe.title", "What we believe"),
    ("about.believe.one", "Owners deserve instant control over pricing and availability."),
    ("about.believe.two", "Clients deserve listings that answer questions fast."),
    ("about.believe.three", "Transparency builds trust throughout the leasing process."),
    ("about.believe.four", "Mobile-first experiences should still feel premium and calm."),
    ("about.delivers.title", "What PangaLeo delivers"),
    (
        "about.delivers.body",
        "From listing creation to occupancy tracking, PangaLeo covers the full lifecycle of a property. Media galleries, structured location details, and status updates help owners act quickly while clients stay confident in their choices.",
    ),
    ("about.modern.title", "Built with modern foundations"),
    (
        "about.modern.body",
        "The app is crafted with Flutter for fast, responsive performance. That means a consistent experience across devices and a design system that stays clean as the platform scales.",
    ),
    // Contact page
    ("contact.eyebrow", "Contact"),
    ("contact.title", "Let us know about your properties and clients."),
    (
        "contact.body",
        "PangaLeo supports owners and clients with a clear, modern property experience.",
    ),
    ("contact.reach.title", "Reach us directly"),
    (
        "contact.reach.body",
        "Share your portfolio size, your team structure, and the client experience you want to deliver.",
    ),
    ("contact.email.label", "Email:"),
    ("contact.phone.label", "Phone:"),
    ("contact.availability.label", "Availability:"),
    ("contact.availability.value", "Monday to Friday, 9:00 - 17:00"),
    ("contact.form.title", "Send a message"),
    ("contact.form.name", "Your name"),
    ("contact.form.email", "Email address"),
    ("contact.form.company", "Company or portfolio"),
    ("contact.form.message", "Tell us what you need"),
    ("contact.form.button", "Send message"),
    // Privacy policy page
    ("privacy.eyebrow", "Privacy Policy"),
    ("privacy.title", "Privacy that is clear, calm, and transparent."),
    ("privacy.updated", "Last updated: February 17, 2026."),
    ("privacy.overview.title", "Overview"),
    (
        "privacy.overview.body",
        "PangaLeo values privacy and handles information with care. This policy explains what we collect, how we use it, and the choices available to you when using our platform.",
    ),
    ("privacy.collect.title", "Information we collect"),
    (
        "privacy.collect.body",
        "We collect data you provide and data needed for core features, including:",
    ),
    (
        "privacy.collect.one",
        "Account details such as name, phone number, email address, and username.",
    ),
    ("privacy.collect.two", "Login credentials (password) used to access your account."),
    ("privacy.collect.three", "Photos and property listing details you upload."),
    (
        "privacy.collect.four",
        "Precise location (GPS) used to support property discovery and map features.",
    ),
    ("privacy.use.title", "How we use information"),
    ("privacy.use.body", "We use collected information to:"),
    ("privacy.use.one", "Provide and maintain the PangaLeo service."),
    ("privacy.use.two", "Keep property data accurate and accessible to your team."),
    ("privacy.use.three", "Improve performance, reliability, and user experience."),
    ("privacy.share.title", "Sharing and disclosure"),
    (
        "privacy.share.body",
        "We do not sell your data. We use service providers such as Supabase for storage and Google Maps for map features. They process data to deliver the service, and we only share data as needed or when required by law.",
    ),
    ("privacy.retention.title", "Data retention"),
    (
        "privacy.retention.body",
        "We retain information only as long as needed to provide the service and meet legal obligations.",
    ),
    ("privacy.deletion.title", "Data Deletion and Account Removal"),
    (
        "privacy.deletion.intro",
        "We provide a transparent way for users to delete their accounts and all associated personal data.",
    ),
    (
        "privacy.deletion.inapp",
        "In-App Deletion: Users can delete their account at any time by navigating to Settings > Profile > Delete Account within the PangaLeo app.",
    ),
    (
        "privacy.deletion.web",
        "Web Request: If you cannot access the app, you may request account and data deletion by emailing us at",
    ),
    (
        "privacy.deletion.timing",
        "Upon request, all personal data (name, email, and profile details) will be permanently removed from our active databases within 30 days, except where retention is required by law.",
    ),
    ("privacy.children.title", "Children's Privacy"),
    (
        "privacy.children.body",
        "PangaLeo is not intended for use by children under the age of 13. We do not knowingly collect personal information from children. If we become aware that a child under 13 has provided us with personal information, we will take immediate steps to delete such data.",
    ),
    ("privacy.choices.title", "Your choices"),
    (
        "privacy.choices.body",
        "You can review or update account information at any time. Contact us if you want to access, correct, or delete data.",
    ),
    ("privacy.changes.title", "Changes to this policy"),
    (
        "privacy.changes.body",
        "We may update this policy to reflect changes in our practices. When we do, the updated date at the top will change.",
    ),
    ("privacy.contact.title", "Contact"),
    ("privacy.contact.body", "If you have questions about privacy or data handling, reach out at"),
];

// ─── Swahili ────────────────────────────────────────────────────────

const SW: &[(&str, &str)] = &[
    // Navigation
    ("nav.menu", "Menyu"),
    ("nav.about", "Kuhusu"),
    ("nav.how", "Jinsi Inavyofanya Kazi"),
    ("nav.screens", "Safari ya mpangaji"),
    ("nav.contact", "Wasiliana"),
    ("nav.privacy", "Sera ya Faragha"),
    ("nav.demo", "Pakua sasa"),
    // Hero
    ("hero.eyebrow", "Matatizo ya kutafuta nyumba basi"),
    ("hero.title", "Tafuta nyumba ya kupanga haraka, bila usumbufu wa kawaida."),
    (
        "hero.body",
        "PangaLeo inaondoa changamoto za kutafuta nyumba. Orodha zilizothibitishwa, picha wazi, bei na upatikanaji wa muda halisi, pamoja na mawasiliano ya moja kwa moja na wamiliki au mawakala — vyote sehemu moja.",
    ),
    ("hero.cta_primary", "Pakua sasa"),
    ("hero.cta_secondary", "Ona inavyofanya kazi"),
    // Hero stats
    ("stat.one.title", "Orodha zilizo tayari kwa wateja"),
    ("stat.one.desc", "Maelezo kamili yanajibu maswali muhimu mapema."),
    ("stat.two.title", "Udhibiti wa mmiliki"),
    ("stat.two.desc", "Sasisha bei, upatikanaji, na hali kwa haraka."),
    ("stat.three.title", "Muktadha wa pamoja"),
    ("stat.three.desc", "Maoni na taarifa za mali hubaki pamoja."),
    // Hero
    ("hero.card", "Muonekano wa kisasa, unaoaminika na wamiliki, na rafiki kwa wateja."),
    // Property previews
    ("preview.eyebrow", "Muonekano wa nyumba"),
    ("preview.title", "Onyesha nyumba kwa mwonekano wa kisasa."),
    ("preview.body", "Picha bora, maelezo mafupi, na viwango vya bei hutoa uamuzi wa haraka."),
    ("preview.card.one.tag", "Mpya"),
    ("preview.card.one.title", "Nyumba ya familia vyumba 3 yenye mwanga mwingi"),
    ("preview.card.one.meta", "Dar es Salaam (Kinondoni) ? Kuanzia TZS 850k/mo"),
    ("preview.card.two.tag", "Maarufu"),
    ("preview.card.two.title", "Fleti ya kisasa vyumba 2 mjini"),
    ("preview.card.two.meta", "Arusha (Njiro) ? Kuanzia TZS 1.2M/mo"),
    ("preview.card.three.tag", "Pwani"),
    ("preview.card.three.title", "Villa yenye mwonekano wa bahari"),
    ("preview.card.three.meta", "Zanzibar (Stone Town) ? Kuanzia TZS 2.5M/mo"),
    // Why PangaLeo
    ("why.eyebrow", "Kwa nini PangaLeo"),
    ("why.title", "Uwazi kwa wamiliki. Ujasiri kwa wateja."),
    (
        "why.body",
        "Kila skrini huweka taarifa za mali, picha, na upatikanaji katika mstari mmoja ili pande zote ziwe na maamuzi sahihi.",
    ),
    // Feature grid
    ("feature.one.title", "Orodha zilizo tayari kwa wateja"),
    (
        "feature.one.desc",
        "Bei, huduma, na picha huwasilishwa kwa mpangilio unaorahisisha kulinganisha.",
    ),
    ("feature.two.title", "Dashibodi ya mmiliki"),
    ("feature.two.desc", "Sasisha bei, upatikanaji, na maelezo bila kutumia zana nyingi."),
    ("feature.three.title", "Ushirikiano wa kuaminika"),
    ("feature.three.desc", "Maoni, hatua, na historia ya mali hubaki sehemu moja kwa timu."),
    ("feature.four.title", "Uwazi wa eneo"),
    ("feature.four.desc", "Mikoa, wilaya, na kata huonyesha eneo halisi kwa utafutaji wa haraka."),
    ("feature.five.title", "Picha zinazoleta imani"),
    ("feature.five.desc", "Makundi ya picha na video huongeza uaminifu kabla ya ziara."),
    ("feature.six.title", "Utendaji wa kwanza kwa simu"),
    ("feature.six.desc", "Imeboreshwa kwa simu kwa kasi, uthabiti, na matumizi mepesi."),
    // Workflow
    ("workflow.eyebrow", "Mtiririko"),
    ("workflow.title", "Kutoka kupakia kwa mmiliki hadi uamuzi wa mteja."),
    (
        "workflow.body",
        "Mtiririko rahisi unaowaunganisha wamiliki, timu, na wateja kwenye taarifa moja.",
    ),
    // Workflow steps
    ("step.one.title", "Wamiliki huchapisha"),
    ("step.one.desc", "Weka bei, aina, huduma, na maelezo ya eneo kwa uwazi wa juu."),
    ("step.two.title", "Wateja huchunguza"),
    (
        "step.two.desc",
        "Skrini zilizo wima huwezesha kuchuja, kulinganisha, na kuona picha kwa urahisi.",
    ),
    ("step.three.title", "Timu hufunga"),
    ("step.three.desc", "Hali ya moja kwa moja na maoni huweka mawasiliano wazi hadi kukamilika."),
    // Tenant journey screenshots
    ("screens.eyebrow", "Safari ya mpangaji"),
    ("screens.title", "Safari ya kukaribisha wapangaji kupata makazi yao."),
    (
        "screens.body",
        "Wapangaji wanaweza kuvinjari, kulinganisha, na kuwasiliana kwa ujasiri kupitia skrini zilizo wazi na za haraka.",
    ),
    ("screens.card.one", "Ugunduzi wa nyumbani"),
    ("screens.card.two", "Uvinjari wa mteja"),
    ("screens.card.three", "Maelezo ya orodha"),
    ("screens.card.four", "Sajili na ungana"),
    // Trust and privacy
    ("trust.eyebrow", "Uaminifu na faragha"),
    ("trust.title", "Imeundwa kwa ujasiri na uwajibikaji."),
    (
        "trust.body",
        "PangaLeo inaheshimu data. Orodha zinabaki zimepangwa, ufikiaji unadhibitiwa, na faragha inalinda wamiliki na wateja.",
    ),
    ("trust.one.title", "Data yenye kusudi"),
    ("trust.one.desc", "Tunakusanya tu taarifa zinazohitajika kuweka mali sahihi na ya sasa."),
    ("trust.two.title", "Sasisho wazi"),
    ("trust.two.desc", "Kila mabadiliko ya hali ya mali huonekana kwa uwazi."),
    ("trust.three.title", "Fikira ya faragha"),
    ("trust.three.desc", "Sera ziko wazi, rahisi kusoma, na bila mshangao."),
    // Call to action
    ("cta.title", "Pakua PangaLeo na uanze kutafuta nyumba leo."),
    (
        "cta.body",
        "Programu ipo Google Play ikiwa na orodha zilizoratibiwa na sasisho za moja kwa moja.",
    ),
    ("cta.button", "Pakua sasa"),
    // Footer
    (
        "footer.tagline",
        "Jukwaa la kisasa la mali lililojengwa kwa wamiliki, wateja, na maamuzi yenye ujasiri.",
    ),
    ("footer.company", "Kampuni"),
    ("footer.explore", "Gundua"),
    ("footer.contact", "Wasiliana"),
    ("footer.email", "Tuma barua pepe"),
    ("footer.whatsapp", "WhatsApp"),
    ("footer.phone", "Piga simu"),
    ("footer.download", "Pakua sasa"),
    // WhatsApp greeting (URL-encoded into wa.me links)
    ("whatsapp.message", "Habari timu ya PangaLeo, naomba msaada wa kupata nyumba ya kupanga."),
    // Side contact form
    ("sideform.title", "Tuma ujumbe"),
    // Contact form fields and status lines
    ("form.status.sending", "Inatumwa..."),
    ("form.status.success", "Ujumbe umetumwa. Tutakujibu hivi karibuni."),
    ("form.status.fail", "Ujumbe haukutumwa. Tafadhali jaribu tena."),
    ("form.status.missing", "Huduma ya barua pepe haijawekwa bado."),
    // Footer
    ("footer.copy_prefix", "©"),
    ("footer.copy_suffix", "PangaLeo. Haki zote zimehifadhiwa."),
    // About page
    ("about.eyebrow", "Kuhusu PangaLeo"),
    ("about.title", "Imejengwa kwa wamiliki na wateja wanaowahudumia."),
    (
        "about.body",
        "PangaLeo inaweka orodha, upatikanaji, na ushirikiano kwenye nafasi moja tulivu.",
    ),
    ("about.focus.title", "Mwelekeo wetu"),
    (
        "about.focus.body",
        "Tunarahisisha uendeshaji wa mali: udhibiti wa haraka kwa wamiliki, uwazi kwa wateja, na ushirikiano wa timu bila kurukaruka kati ya zana.",
    ),
    ("about.believe.title", "Tunaamini"),
    ("about.believe.one", "Wamiliki wanastahili udhibiti wa papo kwa bei na upatikanaji."),
    ("about.believe.two", "Wateja wanastahili orodha zinazojibu maswali haraka."),
    ("about.believe.three", "Uwazi hujenga imani katika mchakato wa ukodishaji."),
    ("about.believe.four", "Uzoefu wa kwanza kwa simu unapaswa kubaki premium na tulivu."),
    ("about.delivers.title", "PangaLeo inaleta nini"),
    (
        "about.delivers.body",
        "Kuanzia uundaji wa orodha hadi kufuatilia upatikanaji, PangaLeo hufunika mzunguko mzima wa mali. Makundi ya picha, maelezo ya eneo yaliyojengwa, na sasisho la hali husaidia wamiliki kuchukua hatua haraka huku wateja wakibaki na ujasiri.",
    ),
    ("about.modern.title", "Imejengwa kwa misingi ya kisasa"),
    (
        "about.modern.body",
        "Programu imeundwa kwa Flutter kwa utendaji wa haraka na unaojibu. Hii huleta uzoefu unaofanana kwenye vifaa na mfumo wa muundo unaobaki safi kadiri jukwaa linavyokua.",
    ),
    // Contact page
    ("contact.eyebrow", "Wasiliana"),
    ("contact.title", "Tuambie kuhusu mali zako na wateja wako."),
    (
        "contact.body",
        "PangaLeo inaunga mkono wamiliki na wateja kwa uzoefu wazi na wa kisasa wa mali.",
    ),
    ("contact.reach.title", "Wasiliana nasi moja kwa moja"),
    (
        "contact.reach.body",
        "Shiriki ukubwa wa portfolio yako, muundo wa timu, na uzoefu wa wateja unaotaka kutoa.",
    ),
    ("contact.email.label", "Barua pepe:"),
    ("contact.phone.label", "Simu:"),
    ("contact.availability.label", "Upatikanaji:"),
    ("contact.availability.value", "Jumatatu hadi Ijumaa, 9:00 - 17:00"),
    ("contact.form.title", "Tuma ujumbe"),
    ("contact.form.name", "Jina lako"),
    ("contact.form.email", "Anwani ya barua pepe"),
    ("contact.form.company", "Kampuni au portfolio"),
    ("contact.form.message", "Tuambie unachohitaji"),
    ("contact.form.button", "Tuma ujumbe"),
    // Privacy policy page
    ("privacy.eyebrow", "Sera ya Faragha"),
    ("privacy.title", "Faragha iliyo wazi, tulivu, na yenye uwazi."),
    ("privacy.updated", "Imesasishwa mwisho: Februari 17, 2026."),
    ("privacy.overview.title", "Muhtasari"),
    (
        "privacy.overview.body",
        "PangaLeo inathamini faragha na hushughulikia taarifa kwa uangalifu. Sera hii inaeleza tunachokusanya, tunavyotumia, na chaguo ulizo nazo unapotumia jukwaa.",
    ),
    ("privacy.collect.title", "Taarifa tunazokusanya"),
    (
        "privacy.collect.body",
        "Tunakusanya taarifa unazotoa na zinazohitajika kwa vipengele vya msingi, ikiwemo:",
    ),
    (
        "privacy.collect.one",
        "Maelezo ya akaunti kama jina, namba ya simu, barua pepe, na jina la mtumiaji.",
    ),
    ("privacy.collect.two", "Taarifa za kuingia (nenosiri) zinazotumika kufikia akaunti."),
    ("privacy.collect.three", "Picha na maelezo ya orodha ya mali unayopakia."),
    (
        "privacy.collect.four",
        "Eneo sahihi (GPS) linalotumika kusaidia ugunduzi wa mali na huduma za ramani.",
    ),
    ("privacy.use.title", "Jinsi tunavyotumia taarifa"),
    ("privacy.use.body", "Tunatumia taarifa zilizokusanywa ili:"),
    ("privacy.use.one", "Kutoa na kuendeleza huduma ya PangaLeo."),
    ("privacy.use.two", "Kuweka data ya mali ikiwa sahihi na inayopatikana kwa timu."),
    ("privacy.use.three", "Kuboresha utendaji, uthabiti, na uzoefu wa mtumiaji."),
    ("privacy.share.title", "Kushirikisha na kufichua"),
    (
        "privacy.share.body",
        "Hatuuzi data yako. Tunatumia watoa huduma kama Supabase kwa uhifadhi na Google Maps kwa huduma za ramani. Watoa huduma hao hushughulikia data ili kutoa huduma, na tunashiriki taarifa pale tu inapohitajika au inapolazimika kisheria.",
    ),
    ("privacy.retention.title", "Uhifadhi wa data"),
    (
        "privacy.retention.body",
        "Tunatunza taarifa kwa muda unaohitajika kutoa huduma na kutimiza wajibu wa kisheria.",
    ),
    ("privacy.deletion.title", "Uondoaji wa akaunti na data"),
    (
        "privacy.deletion.intro",
        "Tunatoa njia wazi kwa watumiaji kufuta akaunti zao na data zote zinazohusiana.",
    ),
    (
        "privacy.deletion.inapp",
        "Uondoaji ndani ya programu: Watumiaji wanaweza kufuta akaunti yao wakati wowote kwa kwenda kwenye Mipangilio > Wasifu > Futa Akaunti ndani ya programu ya PangaLeo.",
    ),
    (
        "privacy.deletion.web",
        "Ombi la tovuti: Ikiwa huwezi kufikia programu, unaweza kuomba kufuta akaunti na data kwa kutuma barua pepe kupitia",
    ),
    (
        "privacy.deletion.timing",
        "Kwa ombi, data yote binafsi (jina, barua pepe, na maelezo ya wasifu) itafutwa kabisa kutoka hifadhidata zetu hai ndani ya siku 30, isipokuwa pale sheria zinapotaka ihifadhiwe.",
    ),
    ("privacy.children.title", "Faragha ya watoto"),
    (
        "privacy.children.body",
        "PangaLeo haijakusudiwa kutumiwa na watoto walio chini ya umri wa miaka 13. Hatukusanyi kwa makusudi taarifa binafsi kutoka kwa watoto. Ikitokea tunagundua mtoto chini ya miaka 13 ametupa taarifa binafsi, tutachukua hatua za haraka kufuta data hiyo.",
    ),
    ("privacy.choices.title", "Chaguo zako"),
    (
        "privacy.choices.body",
        "Unaweza kukagua au kusasisha taarifa za akaunti wakati wowote. Wasiliana nasi kama unataka kufikia, kurekebisha, au kufuta data.",
    ),
    ("privacy.changes.title", "Mabadiliko ya sera"),
    (
        "privacy.changes.body",
        "Tunaweza kusasisha sera hii kulingana na mabadiliko ya utendaji. Tarehe ya juu itabadilika kila tunapoboresha.",
    ),
    ("privacy.contact.title", "Wasiliana"),
    ("privacy.contact.body", "Kwa maswali kuhusu faragha au matumizi ya data, wasiliana kupitia"),
];
