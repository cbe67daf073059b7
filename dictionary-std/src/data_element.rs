use crate::tags::ENTRIES;
use dicomkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef};
use dicomkit_core::header::Tag;
use dicomkit_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DataDictionaryEntryRef<'static>>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 1),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DataDictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// The number of attributes in the registry.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when reading DICOM objects.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DataDictionaryEntryRef<'static>> {
        registry().by_tag.get(&tag).copied().or_else(|| {
            // check for private creator
            if tag.is_private() && (0x0010..=0x00FF).contains(&tag.element()) {
                return Some(&PRIVATE_CREATOR_ENTRY);
            }
            // check for group length
            if tag.is_group_length() {
                return Some(&GROUP_LENGTH_ENTRY);
            }

            None
        })
    }

    /// Look up the typical value representation of an attribute.
    pub fn vr_of(tag: Tag) -> Option<VR> {
        Self::indexed_tag(tag).map(|e| e.vr)
    }

    /// Resolve an attribute keyword (such as `"PatientName"`)
    /// or a tag expression in the form `(GGGG,EEEE)` or `GGGG,EEEE`
    /// into a tag.
    pub fn parse_tag(&self, tag: &str) -> Option<Tag> {
        let inner = tag
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(tag);
        if let Some((group, element)) = inner.split_once(',') {
            if group.len() == 4 && element.len() == 4 {
                let group = u16::from_str_radix(group, 16).ok()?;
                let element = u16::from_str_radix(element, 16).ok()?;
                return Some(Tag(group, element));
            }
            return None;
        }
        self.by_name(tag).map(|e| e.tag)
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic group length is not a listed entry,
    // inserting it manually
    d.by_name.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dicomkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef};
    use dicomkit_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Tag(0x0010, 0x0010),
                alias: "PatientName",
                vr: VR::PN,
            })
        );

        assert_eq!(
            dict.by_name("Modality"),
            Some(&DataDictionaryEntryRef {
                tag: Tag(0x0008, 0x0060),
                alias: "Modality",
                vr: VR::CS,
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Tag(0x7FE0, 0x0010));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VR::OB);

        let record_sequence = dict
            .by_tag(Tag(0x0004, 0x1220))
            .expect("Directory Record Sequence should exist");
        assert_eq!(record_sequence.vr, VR::SQ);
    }

    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(NUMBER_OF_FRAMES, Tag(0x0028, 0x0008));
        assert_eq!(DIRECTORY_RECORD_TYPE, Tag(0x0004, 0x1430));
    }

    #[test]
    fn entries_are_sorted_and_unique() {
        let tags: Vec<_> = crate::tags::ENTRIES.iter().map(|e| e.tag).collect();
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(crate::tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(dict.parse_tag("PatientID"), Some(crate::tags::PATIENT_ID));

        // can't parse these
        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
    }

    #[test]
    fn has_group_length_tags() {
        use crate::tags::*;
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_tag(FILE_META_INFORMATION_GROUP_LENGTH),
            Some(&DataDictionaryEntryRef {
                tag: FILE_META_INFORMATION_GROUP_LENGTH,
                alias: "FileMetaInformationGroupLength",
                vr: VR::UL,
            }),
        );

        // generic group length
        let entry = dict.by_tag(Tag(0x7FE0, 0x0000)).unwrap();
        assert_eq!(entry.alias, "GenericGroupLength");
        assert_eq!(entry.vr, VR::UL);
        assert_eq!(dict.by_name("GenericGroupLength").map(|e| e.vr), Some(VR::UL));
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary::default();

        for tag in [Tag(0x0009, 0x0010), Tag(0x0009, 0x0011), Tag(0x000B, 0x0010), Tag(0x00ED, 0x00FF)] {
            let entry = dict.by_tag(tag).unwrap();
            assert_eq!(entry.alias, "PrivateCreator");
            assert_eq!(entry.vr, VR::LO);
        }
        // private data elements are not known
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1001)), None);
    }
}
