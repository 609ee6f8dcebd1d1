// SPDX-License-Identifier: PMPL-1.0-or-later

//! Image/caption carousel on the landing page.
//!
//! The page declares a `[data-slider]` element listing its image files and
//! a `|`-separated caption list per language. Mounting shuffles the images,
//! appends one slide and one caption element per entry into the track, and
//! hands back a [`MountedCarousel`] that the host ticks on an interval.
//!
//! The translation engine only sees the carousel through a
//! [`CaptionBinding`]: a caption hook plus the live caption slots.

use crate::dom::{attr, class, Document};
use crate::i18n::Lang;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Milliseconds between slide changes.
pub const ROTATION_INTERVAL_MS: u32 = 4500;

/// Folder holding slider images referenced by bare file name.
pub const DEFAULT_ASSET_DIR: &str = "assets/sliders";

const SLIDE_ALT: &str = "PangaLeo rental preview";
const PLACEHOLDER_CAPTION: &str = "PangaLeo rental highlight";

/// Produces the ordered captions for a language.
pub trait CaptionHook {
    fn captions_for(&self, lang: Lang) -> Vec<String>;
}

impl<F> CaptionHook for F
where
    F: Fn(Lang) -> Vec<String>,
{
    fn captions_for(&self, lang: Lang) -> Vec<String> {
        self(lang)
    }
}

/// What the translation engine needs from a carousel.
pub struct CaptionBinding<E> {
    pub hook: Box<dyn CaptionHook>,
    pub slots: Vec<E>,
}

impl<E> CaptionBinding<E> {
    pub fn new(hook: impl CaptionHook + 'static, slots: Vec<E>) -> Self {
        Self {
            hook: Box::new(hook),
            slots,
        }
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for CaptionBinding<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionBinding")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

/// Caption lists as authored on the slider element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionSource {
    english: Vec<String>,
    swahili: Vec<String>,
}

impl CaptionSource {
    pub fn from_attributes(english_raw: &str, swahili_raw: &str) -> Self {
        Self {
            english: split_list(english_raw, '|'),
            swahili: split_list(swahili_raw, '|'),
        }
    }

    /// Captions rendered before the first translation pass: Swahili, else
    /// English, else a generic caption per image.
    pub fn initial(&self, image_count: usize) -> Vec<String> {
        if !self.swahili.is_empty() {
            return self.swahili.clone();
        }
        if !self.english.is_empty() {
            return self.english.clone();
        }
        vec![PLACEHOLDER_CAPTION.to_string(); image_count]
    }
}

impl CaptionHook for CaptionSource {
    fn captions_for(&self, lang: Lang) -> Vec<String> {
        match lang {
            Lang::Sw => self.swahili.clone(),
            Lang::En => self.english.clone(),
        }
    }
}

/// Splits an authored list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Bare file names live in the asset folder; anything with a `/` is used as is.
pub fn image_src(asset_dir: &str, name: &str) -> String {
    if name.contains('/') {
        name.to_string()
    } else {
        format!("{}/{}", asset_dir.trim_end_matches('/'), name)
    }
}

/// Interval-driven active-slide index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    current: usize,
    len: usize,
    running: bool,
}

/// One step of the rotation: the slide losing `is-active` and the one gaining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Rotation {
    /// Rotation only runs with two or more slides and motion allowed.
    pub fn new(len: usize, reduced_motion: bool) -> Self {
        Self {
            current: 0,
            len,
            running: len > 1 && !reduced_motion,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self) -> Option<Transition> {
        if !self.running {
            return None;
        }
        let from = self.current;
        self.current = (self.current + 1) % self.len;
        Some(Transition {
            from,
            to: self.current,
        })
    }

    /// Stops producing transitions; the host clears its interval.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Options read by [`mount`].
#[derive(Debug, Clone)]
pub struct MountOptions {
    pub asset_dir: String,
    pub reduced_motion: bool,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
            reduced_motion: false,
        }
    }
}

/// A carousel whose slides and captions have been appended to the page.
#[derive(Debug)]
pub struct MountedCarousel<E> {
    pub slides: Vec<E>,
    pub captions: Vec<E>,
    pub source: CaptionSource,
    pub rotation: Rotation,
    /// Click-through URL from `data-slider-link`.
    pub link: Option<String>,
}

impl<E: Clone> MountedCarousel<E> {
    /// Advances the rotation and moves `is-active` accordingly.
    pub fn tick<D>(&mut self, doc: &mut D) -> Option<Transition>
    where
        D: Document<Element = E>,
    {
        let step = self.rotation.tick()?;
        doc.remove_class(&self.slides[step.from], class::ACTIVE);
        if let Some(caption) = self.captions.get(step.from) {
            doc.remove_class(caption, class::ACTIVE);
        }
        doc.add_class(&self.slides[step.to], class::ACTIVE);
        if let Some(caption) = self.captions.get(step.to) {
            doc.add_class(caption, class::ACTIVE);
        }
        Some(step)
    }

    /// Caption hook and slots for the translation engine.
    pub fn caption_binding(&self) -> CaptionBinding<E> {
        CaptionBinding::new(self.source.clone(), self.captions.clone())
    }
}

/// Mounts the page's `[data-slider]`, if it has one with a track and images.
pub fn mount<D, R>(
    doc: &mut D,
    rng: &mut R,
    options: &MountOptions,
) -> Option<MountedCarousel<D::Element>>
where
    D: Document,
    R: Rng + ?Sized,
{
    let slider = doc.query_first(attr::SLIDER)?;
    let link = doc
        .attribute(&slider, attr::SLIDER_LINK)
        .filter(|link| !link.is_empty());
    let track = doc.query_first_within(&slider, attr::SLIDER_TRACK)?;
    let mut images = split_list(
        &doc.attribute(&slider, attr::SLIDER_IMAGES).unwrap_or_default(),
        ',',
    );
    if images.is_empty() {
        return None;
    }
    images.shuffle(rng);

    let source = CaptionSource::from_attributes(
        &doc.attribute(&slider, attr::SLIDER_CAPTIONS_EN).unwrap_or_default(),
        &doc.attribute(&slider, attr::SLIDER_CAPTIONS_SW).unwrap_or_default(),
    );

    let mut slides = Vec::with_capacity(images.len());
    for (index, name) in images.iter().enumerate() {
        let Some(img) = doc.append_element(&track, "img") else {
            continue;
        };
        doc.set_attribute(&img, attr::SRC, &image_src(&options.asset_dir, name));
        doc.set_attribute(&img, attr::ALT, SLIDE_ALT);
        doc.set_attribute(&img, attr::LOADING, "lazy");
        doc.add_class(&img, class::SLIDER_IMAGE);
        if index == 0 {
            doc.add_class(&img, class::ACTIVE);
        }
        slides.push(img);
    }

    let mut captions = Vec::new();
    for (index, text) in source.initial(slides.len()).iter().enumerate() {
        let Some(caption) = doc.append_element(&track, "div") else {
            continue;
        };
        doc.set_text(&caption, text);
        doc.add_class(&caption, class::SLIDER_CAPTION);
        if index == 0 {
            doc.add_class(&caption, class::ACTIVE);
        }
        captions.push(caption);
    }

    debug!(
        slides = slides.len(),
        captions = captions.len(),
        "mounted carousel"
    );
    let rotation = Rotation::new(slides.len(), options.reduced_motion);
    Some(MountedCarousel {
        slides,
        captions,
        source,
        rotation,
        link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn slider_page(images: &str) -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        let slider = doc
            .create("div")
            .attr(attr::SLIDER, "")
            .attr(attr::SLIDER_IMAGES, images)
            .attr(attr::SLIDER_CAPTIONS_EN, "Bright rooms | Near town |")
            .attr(attr::SLIDER_CAPTIONS_SW, "Vyumba angavu|Karibu na mji")
            .attr(attr::SLIDER_LINK, "https://play.google.com/store/apps")
            .finish();
        doc.create("div")
            .attr(attr::SLIDER_TRACK, "")
            .child_of(slider)
            .finish();
        doc
    }

    #[test]
    fn caption_lists_are_trimmed() {
        let source = CaptionSource::from_attributes(" a | b ||", "");
        assert_eq!(source.captions_for(Lang::En), vec!["a", "b"]);
        assert!(source.captions_for(Lang::Sw).is_empty());
        assert_eq!(source.initial(3), vec!["a", "b"]);
    }

    #[test]
    fn placeholder_captions_when_none_authored() {
        let source = CaptionSource::default();
        assert_eq!(source.initial(2), vec![PLACEHOLDER_CAPTION; 2]);
    }

    #[test]
    fn bare_names_resolve_into_asset_dir() {
        assert_eq!(image_src("assets/sliders", "a.jpg"), "assets/sliders/a.jpg");
        assert_eq!(image_src("assets/sliders/", "a.jpg"), "assets/sliders/a.jpg");
        assert_eq!(image_src("assets/sliders", "img/b.jpg"), "img/b.jpg");
    }

    #[test]
    fn rotation_wraps_and_stops() {
        let mut rotation = Rotation::new(3, false);
        assert_eq!(rotation.tick(), Some(Transition { from: 0, to: 1 }));
        assert_eq!(rotation.tick(), Some(Transition { from: 1, to: 2 }));
        assert_eq!(rotation.tick(), Some(Transition { from: 2, to: 0 }));
        rotation.stop();
        assert_eq!(rotation.tick(), None);
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn rotation_idle_for_single_slide_or_reduced_motion() {
        assert!(!Rotation::new(1, false).is_running());
        assert!(!Rotation::new(4, true).is_running());
        assert!(Rotation::new(2, false).is_running());
    }

    #[test]
    fn mount_appends_slides_and_captions() {
        let mut doc = slider_page("a.jpg, b.jpg, c.jpg");
        let mut rng = StdRng::seed_from_u64(7);
        let carousel = mount(&mut doc, &mut rng, &MountOptions::default()).expect("mounts");
        assert_eq!(carousel.slides.len(), 3);
        assert_eq!(carousel.captions.len(), 2);
        assert_eq!(doc.text(&carousel.captions[0]), "Vyumba angavu");
        assert!(doc.has_class(&carousel.slides[0], class::ACTIVE));
        assert!(!doc.has_class(&carousel.slides[1], class::ACTIVE));
        assert_eq!(carousel.link.as_deref(), Some("https://play.google.com/store/apps"));

        let mut srcs: Vec<String> = carousel
            .slides
            .iter()
            .filter_map(|slide| doc.attribute(slide, attr::SRC))
            .collect();
        srcs.sort();
        assert_eq!(
            srcs,
            vec![
                "assets/sliders/a.jpg",
                "assets/sliders/b.jpg",
                "assets/sliders/c.jpg"
            ]
        );
    }

    #[test]
    fn tick_moves_active_class_even_past_last_caption() {
        let mut doc = slider_page("a.jpg,b.jpg,c.jpg");
        let mut rng = StdRng::seed_from_u64(1);
        let mut carousel = mount(&mut doc, &mut rng, &MountOptions::default()).expect("mounts");
        carousel.tick(&mut doc);
        carousel.tick(&mut doc);
        assert!(doc.has_class(&carousel.slides[2], class::ACTIVE));
        assert!(!doc.has_class(&carousel.captions[1], class::ACTIVE));
        assert!(!doc.has_class(&carousel.captions[0], class::ACTIVE));
        carousel.tick(&mut doc);
        assert!(doc.has_class(&carousel.slides[0], class::ACTIVE));
        assert!(doc.has_class(&carousel.captions[0], class::ACTIVE));
    }

    #[test]
    fn no_images_means_no_carousel() {
        let mut doc = slider_page(" , ");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(mount(&mut doc, &mut rng, &MountOptions::default()).is_none());
    }
}
