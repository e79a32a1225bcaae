// crates/citizen-desk-i18n/src/catalog.rs
// ============================================================================
// Module: Message Catalogs
// Description: Per-locale message tables assembled into nested lookup trees.
// Purpose: Hold every user-facing string of the interface and the CLI.
// Dependencies: crate::locale
// ============================================================================

//! ## Overview
//! Catalogs are authored as flat `(dotted.key, text)` tables, one per locale,
//! and assembled once into an immutable [`CatalogNode`] tree. A key path
//! resolves only when every segment exists and the final segment is a text
//! leaf; landing on a branch is a miss.
//!
//! ## Invariants
//! - Trees are built once per process and read-only thereafter.
//! - All locales carry the same key set and the same placeholders per key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::locale::Locale;

// ============================================================================
// SECTION: Tree
// ============================================================================

/// Node of an assembled catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// Message template.
    Text(&'static str),
    /// Named children.
    Branch(BTreeMap<&'static str, Self>),
}

impl CatalogNode {
    /// Builds a tree from flat dotted entries.
    ///
    /// An entry whose path collides with an existing leaf or branch is
    /// skipped; the first entry wins.
    #[must_use]
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut root = Self::Branch(BTreeMap::new());
        for &(key, text) in entries {
            root.insert(key, text);
        }
        root
    }

    /// Inserts `text` at the dotted `path`. Returns false on a collision.
    fn insert(&mut self, path: &'static str, text: &'static str) -> bool {
        let mut node = self;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let Self::Branch(children) = node else {
                return false;
            };
            if segments.peek().is_none() {
                if children.contains_key(segment) {
                    return false;
                }
                children.insert(segment, Self::Text(text));
                return true;
            }
            node = children.entry(segment).or_insert_with(|| Self::Branch(BTreeMap::new()));
        }
        false
    }

    /// Resolves a dotted key path to its template.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&'static str> {
        let mut node = self;
        for segment in path.split('.') {
            match node {
                Self::Branch(children) => node = children.get(segment)?,
                Self::Text(_) => return None,
            }
        }
        match node {
            Self::Text(text) => Some(*text),
            Self::Branch(_) => None,
        }
    }
}

/// Returns the flat entries authored for `locale`.
#[must_use]
pub const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Ckb => CATALOG_CKB,
        Locale::Kmr => CATALOG_KMR,
        Locale::Ar => CATALOG_AR,
        Locale::En => CATALOG_EN,
    }
}

/// Returns the assembled catalog tree for `locale`.
#[must_use]
pub fn catalog_for(locale: Locale) -> &'static CatalogNode {
    static CATALOG_CKB_TREE: OnceLock<CatalogNode> = OnceLock::new();
    static CATALOG_KMR_TREE: OnceLock<CatalogNode> = OnceLock::new();
    static CATALOG_AR_TREE: OnceLock<CatalogNode> = OnceLock::new();
    static CATALOG_EN_TREE: OnceLock<CatalogNode> = OnceLock::new();
    let cell = match locale {
        Locale::Ckb => &CATALOG_CKB_TREE,
        Locale::Kmr => &CATALOG_KMR_TREE,
        Locale::Ar => &CATALOG_AR_TREE,
        Locale::En => &CATALOG_EN_TREE,
    };
    cell.get_or_init(|| CatalogNode::from_entries(catalog_entries_for(locale)))
}

// ============================================================================
// SECTION: Catalogs
// ============================================================================

/// Kurdish Sorani catalog.
const CATALOG_CKB: &[(&str, &str)] = &[
    ("common.appTitle", "مەڵبەندی سلێمانی"),
    ("common.appSubtitle", "ناردن و بەڕێوەبردنی شکایەت، پێشنیار، پڕۆژە و داواکان"),
    ("common.submitTab", "ناردنی داوا"),
    ("common.manageTab", "بەڕێوەبردنی داواکان"),
    ("common.success", "داواکەت بەسەرکەوتوویی تۆمار کرا"),
    ("common.error", "تکایە هەموو خانە پێویستەکان پڕبکەوە"),
    ("form.requestType", "جۆری داوا *"),
    ("form.subject", "بابەت *"),
    ("form.fullName", "ناوی تەواو *"),
    ("form.mobile", "ژمارەی مۆبایل *"),
    ("form.address", "ناونیشان *"),
    ("form.description", "پێناسە *"),
    ("form.reason", "هۆکاری بینین *"),
    ("form.submit", "ناردنی داوا"),
    ("form.projectTypeButton", "جۆری پڕۆژە"),
    ("form.projectTypeLabel", "جۆری پڕۆژە"),
    ("form.projectTypePlaceholder", "جۆرێکی پڕۆژە هەڵبژێرە"),
    ("form.projectTypeOptions.software", "نەرمەکاڵا"),
    ("form.projectTypeOptions.construction", "بیناسازی"),
    ("form.projectTypeOptions.community", "کۆمەڵایەتی"),
    ("form.projectTypeOptions.other", "هیتر"),
    ("form.placeholders.type", "جۆری داوا هەڵبژێرە"),
    ("form.placeholders.subject", "بابەت بنووسە"),
    ("form.placeholders.name", "ناوی تەواوت بنووسە"),
    ("form.placeholders.mobile", "ژمارەی مۆبایلت بنووسە"),
    ("form.placeholders.address", "ناونیشانت بنووسە"),
    ("form.placeholders.description", "وردەکارییەکان بنووسە..."),
    ("form.placeholders.reason", "هۆکاری بینین بنووسە"),
    ("form.placeholders.search", "بگەڕێ بە ناو یان پێناسە..."),
    ("form.requiredNote", " * خانە پێویستەکانن"),
    ("form.attachments", "فایل و وێنەکان"),
    ("form.addFiles", "پەڕگەکان هەڵبژێرە"),
    (
        "form.filesHelp",
        "وێنە یان پەڕگە بنێرە (PDF, DOCX, XLSX, ZIP). سنوور: 10MB بۆ هەر پەڕگە، تا 5 پەڕگە",
    ),
    ("filters.title", "پاڵاوتنی داواکان"),
    ("filters.type", "جۆر"),
    ("filters.status", "دۆخ"),
    ("filters.allTypes", "هەموو جۆرەکان"),
    ("filters.allStatus", "هەموو دۆخەکان"),
    ("list.showing", "نیشاندان {count} لە {total} داواکاری"),
    ("list.noResultsTitle", "هیچ داوایەک نەدۆزرایەوە"),
    ("list.noResultsHint", "تکایە پاڵاوتەکان دەستکاری بکە"),
    ("labels.date", "ڕێکەوت"),
    ("labels.person", "ناو"),
    ("labels.phone", "مۆبایل"),
    ("labels.location", "ناونیشان"),
    ("types.complaint", "شکایت"),
    ("types.suggestion", "پێشنیار"),
    ("types.project", "پڕۆژە"),
    ("types.request", "داوا"),
    ("status.pending", "لە چاوەڕوانیدا"),
    ("status.in-progress", "لە جێبەجێکردندایە"),
    ("status.resolved", "چارەسەر کرا"),
    ("locale.ckb", "کوردی (سۆرانی)"),
    ("locale.kmr", "Kurdî (Badînî)"),
    ("locale.ar", "العربية"),
    ("locale.en", "English"),
    ("locale.direction.ltr", "چەپ بۆ ڕاست"),
    ("locale.direction.rtl", "ڕاست بۆ چەپ"),
    ("cli.output.stream.stdout", "stdout"),
    ("cli.output.stream.stderr", "stderr"),
    ("cli.output.write_failed", "نووسین بۆ {stream} سەرکەوتوو نەبوو: {error}"),
    ("cli.lang.invalid_env", "بەهای نادروست بۆ {env}: {value}"),
    ("cli.locale.current", "زمانی ئێستا: {name} ({id})، ئاراستە: {direction}، شێواز: {tag}"),
    ("cli.locale.set.ok", "زمان گۆڕدرا بۆ {name}"),
    ("cli.locale.invalid", "زمانی نەناسراو: {value}. چاوەڕوانکراو: {expected}"),
    ("cli.locale.persist_failed", "پاشەکەوتکردنی زمان سەرکەوتوو نەبوو: {error}"),
    ("cli.config.validate.ok", "ڕێکخستنەکان دروستن"),
    ("cli.config.load_failed", "بارکردنی ڕێکخستنەکان سەرکەوتوو نەبوو: {error}"),
    ("cli.serve.starting", "ڕاژەکار لەسەر {bind} کار دەکات"),
    ("cli.serve.failed", "ڕاژەکار شکستی هێنا: {error}"),
    ("cli.translate.param_invalid", "پارامەتەری نادروست '{value}'. شێوازی name=value پێویستە"),
];

/// Kurdish Badini (Kurmanji) catalog.
const CATALOG_KMR: &[(&str, &str)] = &[
    ("common.appTitle", "Serokatiya Silêmanî"),
    ("common.appSubtitle", "Nermijandina û rêveberiya şikên, pêşnîyaran, projeyan û daxwazan"),
    ("common.submitTab", "Daxwazê bişîne"),
    ("common.manageTab", "Nermijandan birêve bike"),
    ("common.success", "Daxwaza te bi serkeftî tomarkirî ye"),
    ("common.error", "Ji kerema xwe hemû qadên pêwîst tije bike"),
    ("form.requestType", "Cureya daxwazê *"),
    ("form.subject", "Mijar *"),
    ("form.fullName", "Nav û paşnav *"),
    ("form.mobile", "Hejmara telefonê *"),
    ("form.address", "Navnîşan *"),
    ("form.description", "Rave *"),
    ("form.reason", "Sedema serdanê *"),
    ("form.submit", "Daxwazê bişîne"),
    ("form.projectTypeButton", "Cureya proje"),
    ("form.projectTypeLabel", "Cureya projeyê"),
    ("form.projectTypePlaceholder", "Cureyek hilbijêre"),
    ("form.projectTypeOptions.software", "Nermalav"),
    ("form.projectTypeOptions.construction", "Avakirina/binasazî"),
    ("form.projectTypeOptions.community", "Civakî"),
    ("form.projectTypeOptions.other", "Yên din"),
    ("form.placeholders.type", "Cureyê daxwazê hilbijêre"),
    ("form.placeholders.subject", "Mijar binivîse"),
    ("form.placeholders.name", "Nav û paşnav binivîse"),
    ("form.placeholders.mobile", "Hejmara telefonê binivîse"),
    ("form.placeholders.address", "Navnîşan binivîse"),
    ("form.placeholders.description", "Agahdariya berfireh binivîse..."),
    ("form.placeholders.reason", "Sedema serdanê binivîse"),
    ("form.placeholders.search", "Li gorî nav an jî rave bigere..."),
    ("form.requiredNote", " * qadan pêwîst in"),
    ("form.attachments", "Pel û wêne"),
    ("form.addFiles", "Pelan hilbijêre"),
    (
        "form.filesHelp",
        "Wêne an pel bar bike (PDF, DOCX, XLSX, ZIP). Sînordar: 10MB/pele, heta 5 pel",
    ),
    ("filters.title", "Fîltreya nermijandan"),
    ("filters.type", "Cure"),
    ("filters.status", "Rewş"),
    ("filters.allTypes", "Hemû cureyan"),
    ("filters.allStatus", "Hemû rewşan"),
    ("list.showing", "Dîtandina {count} ji {total} nermijandan"),
    ("list.noResultsTitle", "Tu nermijandek nehat dîtin"),
    ("list.noResultsHint", "Ji kerema xwe fîltreyan mîheng bike"),
    ("labels.date", "Dîrok"),
    ("labels.person", "Kes"),
    ("labels.phone", "Telefon"),
    ("labels.location", "Navnîşan"),
    ("types.complaint", "Şikayet"),
    ("types.suggestion", "Pêşnîyar"),
    ("types.project", "Proje"),
    ("types.request", "Daxwaz"),
    ("status.pending", "Li benda"),
    ("status.in-progress", "Di pêvajoyê de"),
    ("status.resolved", "Çareser bû"),
    ("locale.ckb", "کوردی (سۆرانی)"),
    ("locale.kmr", "Kurdî (Badînî)"),
    ("locale.ar", "العربية"),
    ("locale.en", "English"),
    ("locale.direction.ltr", "Ji çepê ber bi rastê"),
    ("locale.direction.rtl", "Ji rastê ber bi çepê"),
    ("cli.output.stream.stdout", "stdout"),
    ("cli.output.stream.stderr", "stderr"),
    ("cli.output.write_failed", "Nivîsandina li {stream} bi ser neket: {error}"),
    ("cli.lang.invalid_env", "Nirxa nederbasdar ji bo {env}: {value}"),
    ("cli.locale.current", "Zimanê niha: {name} ({id}), alî: {direction}, şêwe: {tag}"),
    ("cli.locale.set.ok", "Ziman bû {name}"),
    ("cli.locale.invalid", "Zimanê nenas: {value}. Tê hêvîkirin: {expected}"),
    ("cli.locale.persist_failed", "Tomarkirina zimên bi ser neket: {error}"),
    ("cli.config.validate.ok", "Mîheng derbasdar e"),
    ("cli.config.load_failed", "Barkirina mîhengê bi ser neket: {error}"),
    ("cli.serve.starting", "Pêşkêşker li ser {bind} dixebite"),
    ("cli.serve.failed", "Pêşkêşker têk çû: {error}"),
    ("cli.translate.param_invalid", "Parametreya nederbasdar '{value}'. Şêweya name=value pêwîst e"),
];

/// Arabic catalog.
const CATALOG_AR: &[(&str, &str)] = &[
    ("common.appTitle", "المقر الرئيسي في السليمانية"),
    ("common.appSubtitle", "إرسال وإدارة الشكاوى والمقترحات والمشاريع والطلبات"),
    ("common.submitTab", "إرسال الطلب"),
    ("common.manageTab", "إدارة الطلبات"),
    ("common.success", "تم حفظ طلبك بنجاح"),
    ("common.error", "الرجاء تعبئة جميع الحقول المطلوبة"),
    ("form.requestType", "نوع الطلب *"),
    ("form.subject", "الموضوع *"),
    ("form.fullName", "الاسم الكامل *"),
    ("form.mobile", "رقم الهاتف *"),
    ("form.address", "العنوان *"),
    ("form.description", "الوصف *"),
    ("form.reason", "سبب المراجعة *"),
    ("form.submit", "إرسال الطلب"),
    ("form.projectTypeButton", "نوع المشروع"),
    ("form.projectTypeLabel", "نوع المشروع"),
    ("form.projectTypePlaceholder", "اختر نوع المشروع"),
    ("form.projectTypeOptions.software", "برمجيات"),
    ("form.projectTypeOptions.construction", "إنشاءات"),
    ("form.projectTypeOptions.community", "مجتمعي"),
    ("form.projectTypeOptions.other", "أخرى"),
    ("form.placeholders.type", "اختر نوع الطلب"),
    ("form.placeholders.subject", "أدخل الموضوع"),
    ("form.placeholders.name", "أدخل اسمك الكامل"),
    ("form.placeholders.mobile", "أدخل رقم هاتفك"),
    ("form.placeholders.address", "أدخل عنوانك"),
    ("form.placeholders.description", "يرجى إدخال تفاصيل الطلب..."),
    ("form.placeholders.reason", "أدخل سبب المراجعة"),
    ("form.placeholders.search", "ابحث بالاسم أو الوصف..."),
    ("form.requiredNote", " * حقول مطلوبة"),
    ("form.attachments", "الملفات والمرفقات"),
    ("form.addFiles", "اختر الملفات"),
    (
        "form.filesHelp",
        "ارفع صورًا أو مستندات (PDF, DOCX, XLSX, ZIP). الحد: 10MB لكل ملف، حتى 5 ملفات",
    ),
    ("filters.title", "تصفية الطلبات"),
    ("filters.type", "النوع"),
    ("filters.status", "الحالة"),
    ("filters.allTypes", "جميع الأنواع"),
    ("filters.allStatus", "جميع الحالات"),
    ("list.showing", "عرض {count} من {total} طلبًا"),
    ("list.noResultsTitle", "لا توجد طلبات"),
    ("list.noResultsHint", "جرّب تعديل عوامل التصفية"),
    ("labels.date", "التاريخ"),
    ("labels.person", "الاسم"),
    ("labels.phone", "الهاتف"),
    ("labels.location", "العنوان"),
    ("types.complaint", "شكوى"),
    ("types.suggestion", "اقتراح"),
    ("types.project", "مشروع"),
    ("types.request", "طلب"),
    ("status.pending", "قيد الانتظار"),
    ("status.in-progress", "قيد التنفيذ"),
    ("status.resolved", "تم الحل"),
    ("locale.ckb", "کوردی (سۆرانی)"),
    ("locale.kmr", "Kurdî (Badînî)"),
    ("locale.ar", "العربية"),
    ("locale.en", "English"),
    ("locale.direction.ltr", "من اليسار إلى اليمين"),
    ("locale.direction.rtl", "من اليمين إلى اليسار"),
    ("cli.output.stream.stdout", "stdout"),
    ("cli.output.stream.stderr", "stderr"),
    ("cli.output.write_failed", "فشلت الكتابة إلى {stream}: {error}"),
    ("cli.lang.invalid_env", "قيمة غير صالحة لـ {env}: {value}"),
    ("cli.locale.current", "اللغة الحالية: {name} ({id})، الاتجاه: {direction}، التنسيق: {tag}"),
    ("cli.locale.set.ok", "تم تغيير اللغة إلى {name}"),
    ("cli.locale.invalid", "لغة غير مدعومة: {value}. المتوقع: {expected}"),
    ("cli.locale.persist_failed", "فشل حفظ تفضيل اللغة: {error}"),
    ("cli.config.validate.ok", "الإعدادات صالحة"),
    ("cli.config.load_failed", "فشل تحميل الإعدادات: {error}"),
    ("cli.serve.starting", "الخادم يعمل على {bind}"),
    ("cli.serve.failed", "فشل الخادم: {error}"),
    ("cli.translate.param_invalid", "معامل غير صالح '{value}'. الصيغة المطلوبة name=value"),
];

/// English catalog.
const CATALOG_EN: &[(&str, &str)] = &[
    ("common.appTitle", "Sulaimanyah Headquarter"),
    ("common.appSubtitle", "Submit and manage complaints, suggestions, projects, and requests"),
    ("common.submitTab", "Submit"),
    ("common.manageTab", "Manage"),
    ("common.success", "Your submission has been saved"),
    ("common.error", "Please fill in all required fields"),
    ("form.requestType", "Request Type *"),
    ("form.subject", "Subject *"),
    ("form.fullName", "Full Name *"),
    ("form.mobile", "Mobile Number *"),
    ("form.address", "Address *"),
    ("form.description", "Description *"),
    ("form.reason", "Reason for visit *"),
    ("form.submit", "Submit"),
    ("form.projectTypeButton", "Project Type"),
    ("form.projectTypeLabel", "Project Type"),
    ("form.projectTypePlaceholder", "Select a project type"),
    ("form.projectTypeOptions.software", "Software"),
    ("form.projectTypeOptions.construction", "Construction"),
    ("form.projectTypeOptions.community", "Community"),
    ("form.projectTypeOptions.other", "Other"),
    ("form.placeholders.type", "Select request type"),
    ("form.placeholders.subject", "Enter subject"),
    ("form.placeholders.name", "Enter your full name"),
    ("form.placeholders.mobile", "Enter your mobile number"),
    ("form.placeholders.address", "Enter your address"),
    ("form.placeholders.description", "Enter details..."),
    ("form.placeholders.reason", "Enter reason for visit"),
    ("form.placeholders.search", "Search by name or description..."),
    ("form.requiredNote", "* Required fields"),
    ("form.attachments", "Files and attachments"),
    ("form.addFiles", "Choose files"),
    (
        "form.filesHelp",
        "Upload images or documents (PDF, DOCX, XLSX, ZIP). Limit: 10MB per file, up to 5 files",
    ),
    ("filters.title", "Filter submissions"),
    ("filters.type", "Type"),
    ("filters.status", "Status"),
    ("filters.allTypes", "All types"),
    ("filters.allStatus", "All statuses"),
    ("list.showing", "Showing {count} of {total} submissions"),
    ("list.noResultsTitle", "No submissions found"),
    ("list.noResultsHint", "Try adjusting the filters"),
    ("labels.date", "Date"),
    ("labels.person", "Name"),
    ("labels.phone", "Phone"),
    ("labels.location", "Address"),
    ("types.complaint", "Complaint"),
    ("types.suggestion", "Suggestion"),
    ("types.project", "Project"),
    ("types.request", "Request"),
    ("status.pending", "Pending"),
    ("status.in-progress", "In progress"),
    ("status.resolved", "Resolved"),
    ("locale.ckb", "کوردی (سۆرانی)"),
    ("locale.kmr", "Kurdî (Badînî)"),
    ("locale.ar", "العربية"),
    ("locale.en", "English"),
    ("locale.direction.ltr", "left to right"),
    ("locale.direction.rtl", "right to left"),
    ("cli.output.stream.stdout", "stdout"),
    ("cli.output.stream.stderr", "stderr"),
    ("cli.output.write_failed", "Failed to write to {stream}: {error}"),
    ("cli.lang.invalid_env", "Invalid value for {env}: {value}"),
    ("cli.locale.current", "Current locale: {name} ({id}), direction: {direction}, format: {tag}"),
    ("cli.locale.set.ok", "Locale set to {name}"),
    ("cli.locale.invalid", "Unsupported locale: {value}. Expected one of: {expected}"),
    ("cli.locale.persist_failed", "Failed to save the locale preference: {error}"),
    ("cli.config.validate.ok", "Configuration is valid"),
    ("cli.config.load_failed", "Failed to load configuration: {error}"),
    ("cli.serve.starting", "Serving on {bind}"),
    ("cli.serve.failed", "Server failed: {error}"),
    ("cli.translate.param_invalid", "Invalid parameter '{value}'. Expected name=value"),
];
