//! Curated static word data: stopwords, common-word frequency sets, city and
//! first-name lists, synonym maps, discourse-marker pairs and pronoun forms.
//!
//! These are deliberately embedded: no external lookup, no model. Components
//! receive them as immutable configuration at construction, so every consumer
//! is testable with substitute data.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::types::Language;

// ---------------------------------------------------------------------------
// Stopwords
// ---------------------------------------------------------------------------

static STOPWORDS_DE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer", "einem",
        "einen", "eines", "und", "oder", "aber", "wenn", "weil", "dass", "ob", "wie",
        "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "mir", "dich", "dir",
        "ihn", "ihm", "uns", "euch", "sich", "man", "nicht", "kein", "keine", "keiner",
        "in", "an", "auf", "zu", "von", "mit", "bei", "für", "nach", "vor", "über",
        "unter", "zwischen", "durch", "gegen", "ohne", "um", "aus", "bis", "seit",
        "ist", "war", "sind", "waren", "wird", "wurde", "werden", "wurden", "hat",
        "haben", "hatte", "hatten", "sein", "bin", "bist", "seid", "sei", "wäre",
        "auch", "noch", "schon", "nur", "sehr", "so", "dann", "da", "hier", "dort",
        "immer", "nie", "oft", "mal", "ja", "nein", "nun", "jetzt", "heute", "mehr",
        "als", "denn", "wann", "was", "wer", "wo", "warum", "welche", "welcher",
        "dieser", "diese", "dieses", "jener", "jene", "jenes", "alle", "alles", "viele",
        "mein", "meine", "dein", "deine", "seine", "ihre", "unser", "euer", "deren",
        "dabei", "damit", "dazu", "daher", "deshalb", "darum", "jedoch", "zwar",
        "bereits", "eigentlich", "einfach", "natürlich", "wirklich", "ziemlich",
        "etwa", "fast", "kaum", "vielleicht", "wohl", "eben", "gerade", "doch",
        "ganz", "gar", "jedenfalls", "außerdem", "zudem", "trotzdem", "dennoch",
    ]
    .into_iter()
    .collect()
});

static STOPWORDS_EN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "if", "when", "because", "that", "which",
        "who", "what", "where", "how", "why", "whether", "as", "is", "are", "was",
        "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
        "will", "would", "shall", "should", "may", "might", "can", "could", "must",
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        "my", "your", "his", "its", "our", "their", "this", "these", "those",
        "in", "on", "at", "to", "for", "of", "with", "by", "from", "up", "about",
        "into", "through", "during", "before", "after", "above", "below", "between",
        "not", "no", "nor", "so", "yet", "both", "either", "neither", "each", "few",
        "more", "most", "other", "some", "such", "only", "own", "same", "than",
        "too", "very", "just", "now", "then", "here", "there", "also", "already",
        "still", "again", "once", "always", "never", "often", "all", "any", "every",
        "much", "several", "am", "got", "get", "even", "well", "back",
        "rather", "quite", "almost", "perhaps", "therefore", "thus", "however",
        "although", "though", "while", "since", "unless", "until", "despite",
        "without", "within", "against", "along", "around", "among", "across",
    ]
    .into_iter()
    .collect()
});

pub fn stopwords(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::De => &STOPWORDS_DE,
        Language::En => &STOPWORDS_EN,
    }
}

// ---------------------------------------------------------------------------
// Common-word frequency sets (for rareWordRate and risk annotation)
// ---------------------------------------------------------------------------

// Roughly the ~300 most frequent tokens per language. Words absent from the
// set are classified "rare". A real frequency corpus could replace this
// behind the same `is_rare_word` interface.

static COMMON_WORDS_EN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for",
        "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his",
        "by", "from", "they", "we", "say", "her", "she", "or", "an", "will", "my",
        "one", "all", "would", "there", "their", "what", "so", "up", "out", "if",
        "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
        "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
        "good", "some", "could", "them", "see", "other", "than", "then", "now", "look",
        "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
        "how", "our", "work", "first", "well", "way", "even", "new", "want", "because",
        "any", "these", "give", "day", "most", "us", "great", "between", "need",
        "large", "often", "hand", "high", "place", "hold", "point", "world", "still",
        "own", "man", "here", "where", "much", "through", "before", "should", "very",
        "long", "down", "life", "never", "each", "those", "right", "ask", "show",
        "try", "keep", "child", "few", "play", "small", "end", "put", "home", "read",
        "big", "set", "air", "line", "help", "boy", "follow", "came", "form", "three",
        "sentence", "tell", "does", "went", "found", "called", "said", "different",
        "number", "head", "around", "order", "move", "part", "below", "country",
        "plant", "last", "school", "father", "tree", "both", "left", "turn", "open",
        "real", "feel", "city", "state", "without", "once", "white", "least", "paper",
        "together", "group", "always", "music", "book", "letter", "until", "river",
        "car", "care", "second", "enough", "side", "face", "thing", "stand", "watch",
        "story", "cut", "done", "hear", "stop", "since", "walk", "example", "late",
        "miss", "idea", "body", "ship", "area", "half", "rock", "fire",
        "south", "piece", "told", "knew", "pass", "farm", "top", "whole", "king",
        "space", "heard", "best", "hour", "better", "true", "during", "hundred",
        "five", "remember", "step", "early", "west", "ground", "interest",
        "reach", "fast", "sing", "listen", "six", "table", "travel", "less",
        "morning", "ten", "simple", "several", "vowel", "toward", "war", "lay", "against",
        "pattern", "slow", "center", "love", "person", "money", "serve", "appear",
        "road", "map", "rain", "rule", "govern", "pull", "cold", "notice", "voice",
        "power", "town", "fine", "drive", "short", "lead", "night", "north",
        "plan", "figure", "star", "box", "noun", "field", "rest", "correct", "able",
        "pound", "beauty", "stood", "contain", "front", "teach",
        "week", "final", "gave", "green", "oh", "quick", "develop", "ocean", "warm",
        "free", "minute", "strong", "special", "behind", "clear", "tail", "produce",
        "fact", "street", "inch", "multiply", "nothing", "course", "stay", "wheel",
        "full", "force", "blue", "object", "decide", "surface", "deep", "moon",
        "island", "foot", "busy", "test", "record", "boat", "common", "gold", "possible",
        "plane", "instead", "dry", "wonder", "laugh", "thousand", "ago", "ran", "check",
        "game", "shape", "equate", "hot", "brought", "heat", "snow", "bed",
        "bring", "sit", "perhaps", "fill", "east", "paint", "language", "among",
    ]
    .into_iter()
    .collect()
});

static COMMON_WORDS_DE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "der", "die", "das", "und", "in", "ist", "von", "zu", "den", "mit", "sich",
        "des", "auf", "für", "nicht", "eine", "als", "auch", "an", "es", "bei",
        "dem", "war", "ein", "so", "man", "noch", "um", "aus", "haben", "nach",
        "aber", "oder", "einer", "werden", "hat", "über", "wir", "sie", "ich",
        "nur", "durch", "da", "wenn", "diesem", "kann", "seiner", "sind", "im",
        "wie", "mehr", "wird", "dann", "alle", "jetzt", "vor", "schon", "hier",
        "ihr", "bis", "ihn", "wurde", "dass", "weil", "diese", "sehr", "mich",
        "du", "mir", "ihm", "uns", "kein", "keine", "viele", "einen", "einem",
        "ersten", "anderen", "wurden", "jedoch", "dabei", "damit", "dazu", "daher",
        "deshalb", "darum", "ohne", "zwischen", "gegen", "seit", "unter", "neue",
        "große", "welche", "welcher", "wann", "welches", "kommt", "gibt", "geht",
        "macht", "sagt", "sehen", "heute", "immer", "mal", "ja", "nein", "nun",
        "doch", "ganz", "gar", "eher", "wohl", "eben", "gleich", "lang", "kurz",
        "alt", "jung", "gut", "schlecht", "groß", "klein", "hoch", "tief", "weit",
        "nah", "bald", "oft", "kommen", "gehen", "wissen", "denken",
        "glauben", "finden", "lassen", "stehen", "liegen", "bleiben", "nehmen",
        "bringen", "halten", "heißen", "leben", "arbeiten", "spielen", "sprechen",
        "schreiben", "lesen", "hören", "wollen", "sollen", "müssen", "dürfen",
        "mögen", "können", "laufen", "geben", "haus", "stadt", "land", "welt",
        "mensch", "kind", "frau", "mann", "tag", "jahr", "zeit", "weg", "hand",
        "kopf", "auge", "herz", "geld", "arbeit", "schule", "buch", "wort", "frage",
        "antwort", "problem", "lösung", "idee", "seite", "punkt", "nummer", "form",
        "art", "weise", "fall", "grund", "ende", "anfang", "mitte", "teil",
        "gruppe", "zahl", "wert", "name", "ort", "raum", "licht", "farbe", "stimme",
        "kraft", "straße", "wald", "baum", "wasser", "feuer", "erde", "luft",
        "nacht", "morgen", "abend", "woche", "monat", "stunde", "minute", "sekunde",
        "ding", "sache", "beispiel", "möglichkeit", "wichtig", "einfach", "richtig",
        "falsch", "schön", "schwer", "leicht", "schnell", "langsam", "stark", "schwach",
        "neu", "erste", "zweite", "dritte", "letzte", "andere", "gleiche",
        "selbst", "viel", "wenig", "weniger", "beide", "jeder", "jedes", "jede",
        "klar", "offen", "erst", "nie", "manchmal", "selten",
        "plötzlich", "gemeinsam", "allein", "zusammen", "bereits", "weiter",
    ]
    .into_iter()
    .collect()
});

/// A word is rare when its normalized alpha form (length >= 3) is absent from
/// the per-language common-word set. Shorter tokens are never rare.
pub fn is_rare_word(word: &str, language: Language) -> bool {
    let normalized: String = word
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | 'ü' | 'ö' | 'ä' | 'ß'))
        .collect();
    if normalized.chars().count() < 3 {
        return false;
    }
    let common = match language {
        Language::De => &*COMMON_WORDS_DE,
        Language::En => &*COMMON_WORDS_EN,
    };
    !common.contains(normalized.as_str())
}

// ---------------------------------------------------------------------------
// Entity generalization data
// ---------------------------------------------------------------------------

pub static CITIES_DE: &[&str] = &[
    "Berlin", "Hamburg", "München", "Köln", "Frankfurt", "Stuttgart", "Düsseldorf",
    "Dortmund", "Essen", "Leipzig", "Bremen", "Dresden", "Hannover", "Nürnberg",
    "Duisburg", "Bochum", "Wuppertal", "Bielefeld", "Bonn", "Münster", "Karlsruhe",
    "Mannheim", "Augsburg", "Wiesbaden", "Gelsenkirchen", "Mönchengladbach",
    "Wien", "Zürich", "Basel", "Bern", "Graz", "Salzburg", "Linz", "Innsbruck",
    "Lausanne", "Genf", "Luzern", "Winterthur", "Klagenfurt",
];

pub static CITIES_EN: &[&str] = &[
    "London", "Manchester", "Birmingham", "Glasgow", "Liverpool", "Bristol",
    "Edinburgh", "Leeds", "Sheffield", "Cardiff", "Belfast", "Newcastle",
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Boston",
    "Seattle", "Denver", "Washington", "Nashville", "Portland", "Las Vegas",
    "Atlanta", "Miami", "Minneapolis", "Detroit", "Louisville", "Baltimore",
    "Toronto", "Vancouver", "Montreal", "Ottawa", "Calgary", "Edmonton",
    "Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Auckland",
    "Paris", "Berlin", "Madrid", "Rome", "Amsterdam", "Tokyo", "Beijing",
];

// Only high-confidence, unambiguous given names. Precision over recall.
pub static FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // German male
        "Thomas", "Michael", "Andreas", "Stefan", "Christian", "Peter", "Klaus",
        "Werner", "Joachim", "Jürgen", "Wolfgang", "Karl", "Heinz", "Walter",
        "Helmut", "Günter", "Dieter", "Gerhard", "Rainer", "Manfred", "Horst",
        "Uwe", "Bernd", "Rolf", "Markus", "Frank", "Oliver", "Martin", "Jan",
        "Lukas", "Finn", "Felix", "Jonas", "Maximilian", "Paul", "Leon", "Elias",
        "Tobias", "Florian", "Philipp", "Alexander", "Sebastian", "Dominic",
        // German female
        "Lena", "Anna", "Emma", "Maria", "Julia", "Laura", "Sarah", "Lisa",
        "Hannah", "Lea", "Leonie", "Mia", "Clara", "Sophie", "Charlotte",
        "Katharina", "Sandra", "Nicole", "Sabine", "Stefanie", "Petra", "Claudia",
        "Monika", "Ursula", "Helga", "Brigitte", "Renate", "Inge", "Hildegard",
        // English male
        "John", "James", "Robert", "David", "William", "Richard", "Joseph",
        "Charles", "Christopher", "Matthew", "Anthony", "Donald", "Mark",
        "Steven", "George", "Kenneth", "Andrew", "Edward", "Brian", "Ronald",
        "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas",
        "Eric", "Jonathan", "Stephen", "Larry", "Justin", "Scott", "Brandon",
        // English female
        "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
        "Jessica", "Karen", "Nancy", "Betty", "Margaret",
        "Ashley", "Dorothy", "Kimberly", "Emily", "Donna", "Michelle", "Carol",
        "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon",
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Context dampening data
// ---------------------------------------------------------------------------

pub static PRONOUNS_DE: &[&str] = &[
    "ich", "mich", "mir", "mein", "meine", "meinen", "meiner", "meinem",
];
pub static PRONOUNS_EN: &[&str] = &["me", "my", "myself", "mine"];

/// Adjacent redundant discourse-marker pairs, collapsed to the canonical form.
/// Matching is case-insensitive; the ordered list is part of the contract.
pub static DISCOURSE_PAIRS_DE: &[(&str, &str)] = &[
    (r"\bdeshalb\s+daher\b", "deshalb"),
    (r"\bdaher\s+deshalb\b", "daher"),
    (r"\bdann\s+anschließend\b", "dann"),
    (r"\banschließend\s+dann\b", "anschließend"),
    (r"\balso\s+deshalb\b", "deshalb"),
    (r"\bdeshalb\s+also\b", "deshalb"),
];

pub static DISCOURSE_PAIRS_EN: &[(&str, &str)] = &[
    (r"\btherefore\s+thus\b", "therefore"),
    (r"\bthus\s+therefore\b", "thus"),
    (r"\bthen\s+afterwards\b", "then"),
    (r"\bafterwards\s+then\b", "afterwards"),
    (r"\bso\s+therefore\b", "therefore"),
    (r"\btherefore\s+so\b", "therefore"),
];

// ---------------------------------------------------------------------------
// Lexical neutralization data
// ---------------------------------------------------------------------------

// High-intensity evaluative words mapped to neutral equivalents. Only
// unambiguous, meaning-preserving mappings; base form only; inflected forms
// are intentionally not matched.

pub static SYNONYMS_DE: &[(&str, &str)] = &[
    ("exzellent", "gut"),
    ("brillant", "gut"),
    ("grandios", "gut"),
    ("phänomenal", "gut"),
    ("außergewöhnlich", "besonders"),
    ("beeindruckend", "gut"),
    ("spektakulär", "auffällig"),
    ("hervorragend", "gut"),
    ("fabelhaft", "gut"),
    ("wunderbar", "schön"),
    ("fantastisch", "gut"),
    ("schockierend", "überraschend"),
    ("erschreckend", "unangenehm"),
    ("katastrophal", "schlecht"),
    ("verheerend", "schlimm"),
    ("schrecklich", "schlecht"),
    ("furchtbar", "schlecht"),
    ("miserabel", "schlecht"),
    ("entsetzlich", "schlimm"),
    ("grauenhaft", "schlimm"),
    ("absurd", "ungewöhnlich"),
    ("bizarr", "ungewöhnlich"),
    ("merkwürdig", "ungewöhnlich"),
];

pub static SYNONYMS_EN: &[(&str, &str)] = &[
    ("excellent", "good"),
    ("brilliant", "good"),
    ("spectacular", "notable"),
    ("phenomenal", "good"),
    ("extraordinary", "notable"),
    ("impressive", "good"),
    ("outstanding", "good"),
    ("fabulous", "good"),
    ("wonderful", "nice"),
    ("fantastic", "good"),
    ("shocking", "surprising"),
    ("horrifying", "unpleasant"),
    ("catastrophic", "bad"),
    ("devastating", "serious"),
    ("terrible", "bad"),
    ("dreadful", "bad"),
    ("miserable", "bad"),
    ("atrocious", "bad"),
    ("horrendous", "bad"),
    ("absurd", "unusual"),
    ("bizarre", "unusual"),
    ("peculiar", "unusual"),
    ("uncanny", "unusual"),
];

// ---------------------------------------------------------------------------
// Numbers bucketing labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct BucketLabels {
    pub some: &'static str,
    pub several: &'static str,
    pub many: &'static str,
    pub time_ago: &'static str,
}

pub fn bucket_labels(language: Language) -> BucketLabels {
    match language {
        Language::De => BucketLabels {
            some: "einige",
            several: "mehrere",
            many: "viele",
            time_ago: "vor einiger Zeit",
        },
        Language::En => BucketLabels {
            some: "some",
            several: "several",
            many: "many",
            time_ago: "some time ago",
        },
    }
}
