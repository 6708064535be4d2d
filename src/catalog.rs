use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Turkish,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::English, Language::Turkish];

    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "tr" | "turkish" => Ok(Language::Turkish),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

/// A word bank entry: placeholder name and its candidate fill words.
pub struct Slot {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

/// Immutable message sources for one language.
pub struct Catalog {
    pub language: Language,
    pub quotes: &'static [&'static str],
    pub templates: &'static [&'static str],
    pub word_bank: &'static [Slot],
    pub promos: &'static [&'static str],
}

impl Catalog {
    pub fn for_language(language: Language) -> &'static Catalog {
        match language {
            Language::English => &ENGLISH,
            Language::Turkish => &TURKISH,
        }
    }

    pub fn words(&self, placeholder: &str) -> Option<&'static [&'static str]> {
        self.word_bank
            .iter()
            .find(|slot| slot.name == placeholder)
            .map(|slot| slot.words)
    }
}

pub static ENGLISH: Catalog = Catalog {
    language: Language::English,
    quotes: &[
        "Discipline creates freedom.",
        "Consistency beats intensity.",
        "Ship small, ship often.",
        "Focus on the next commit, not the whole mountain.",
        "Progress is the product of patience.",
        "Small wins build unstoppable momentum.",
        "Your future code depends on today's effort.",
        "Write it, test it, trust it.",
        "Daily practice turns ideas into impact.",
        "One focused hour beats a distracted day.",
        "Your habits are your roadmap.",
        "Build systems, not excuses.",
        "Clean code starts with clear thinking.",
        "Great software is built one disciplined day at a time.",
        "Momentum is earned, not given.",
        "Dreams require deadlines.",
        "Show up, even when it's hard.",
        "The long game always wins.",
        "Turn setbacks into setups.",
        "Push one more commit.",
        "A calm mind writes better code.",
        "Structure fuels creativity.",
        "Master the boring, earn the brilliant.",
        "Think in milestones, act in minutes.",
        "Refactor your habits, not just your code.",
        "Success is scheduled, not spontaneous.",
        "Deep work creates deep results.",
        "One bug fixed is one step forward.",
        "Keep your promises to yourself.",
        "Aim for progress, not perfection.",
        "Success is built in quiet hours.",
    ],
    templates: &[
        "Stay {adjective} and keep {verb} toward your {goal}.",
        "{action} today so your {goal} grows tomorrow.",
        "{adjective} focus makes {goal} inevitable.",
        "Keep {verb}; your {goal} is closer than you think.",
    ],
    word_bank: &[
        Slot {
            name: "adjective",
            words: &["disciplined", "steady", "focused", "consistent", "relentless"],
        },
        Slot {
            name: "verb",
            words: &["building", "iterating", "shipping", "learning", "improving"],
        },
        Slot {
            name: "goal",
            words: &["mastery", "success", "momentum", "career", "long-term vision"],
        },
        Slot {
            name: "action",
            words: &[
                "Invest an hour",
                "Write one feature",
                "Fix one bug",
                "Review your roadmap",
            ],
        },
    ],
    promos: &[
        "m0tive is open source. Star it if it keeps you going.",
        "Enjoying m0tive? Share it with a teammate who needs a push.",
    ],
};

pub static TURKISH: Catalog = Catalog {
    language: Language::Turkish,
    quotes: &[
        "Disiplin özgürlük yaratır.",
        "İstikrar, yoğunluğu yener.",
        "Küçük gönder, sık gönder.",
        "Bütün dağa değil, bir sonraki commit'e odaklan.",
        "İlerleme sabrın ürünüdür.",
        "Küçük kazanımlar durdurulamaz bir ivme kurar.",
        "Yarınki kodun bugünkü emeğine bağlı.",
        "Yaz, test et, güven.",
        "Günlük pratik fikirleri etkiye dönüştürür.",
        "Odaklı bir saat, dağınık bir günü yener.",
        "Alışkanlıkların senin yol haritandır.",
        "Bahane değil, sistem kur.",
        "Temiz kod net düşünceyle başlar.",
        "İvme kazanılır, verilmez.",
        "Hayaller son tarih ister.",
        "Zor olsa da orada ol.",
        "Uzun oyun her zaman kazanır.",
        "Bir commit daha gönder.",
        "Sakin bir zihin daha iyi kod yazar.",
        "Yapı yaratıcılığı besler.",
        "Sıkıcı olanda ustalaş, parlak olanı hak et.",
        "Kilometre taşlarıyla düşün, dakikalarla hareket et.",
        "Başarı planlanır, kendiliğinden gelmez.",
        "Mükemmellik değil, ilerleme hedefle.",
    ],
    templates: &[
        "{adjective} kal ve {goal} hedefine doğru {verb} devam et.",
        "Bugün {action}, yarın {goal} büyüsün.",
        "{adjective} odak {goal} sonucunu kaçınılmaz kılar.",
        "{verb} devam et; {goal} düşündüğünden daha yakın.",
    ],
    word_bank: &[
        Slot {
            name: "adjective",
            words: &["Disiplinli", "İstikrarlı", "Odaklı", "Kararlı", "Sabırlı"],
        },
        Slot {
            name: "verb",
            words: &["üretmeye", "öğrenmeye", "geliştirmeye", "göndermeye"],
        },
        Slot {
            name: "goal",
            words: &["ustalık", "başarı", "ivme", "kariyer", "uzun vadeli vizyon"],
        },
        Slot {
            name: "action",
            words: &[
                "bir saat ayır",
                "bir özellik yaz",
                "bir hata düzelt",
                "yol haritanı gözden geçir",
            ],
        },
    ],
    promos: &[
        "m0tive açık kaynak. Seni motive ediyorsa bir yıldız bırak.",
        "m0tive'i sevdin mi? Gaza ihtiyacı olan bir arkadaşınla paylaş.",
    ],
};
