pub mod core;
pub mod dict;
pub mod segment;
pub mod analysis;
pub mod procedures;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                           VITEXT STRUCT ARCHITECTURE                          │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── DICTIONARY ────────────────────────────────┐
│                                                                               │
│  ┌──────────────────────────┐   ┌──────────────────────────────────────┐    │
│  │ struct Dictionary        │   │ dict::loader                          │    │
│  │ • set: fst::Set          │   │ • load(path)        word lists / .fst │    │
│  │ • max_syllables: usize   │   │ • dictionary_for()  process cache     │    │
│  │ • term_count: usize      │   │ • reload_dictionary() atomic swap     │    │
│  │ • longest_match()        │   └──────────────────────────────────────┘    │
│  └──────────────────────────┘                                                │
└───────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── SEGMENTATION ──────────────────────────────┐
│                                                                               │
│  ┌──────────────────────────┐   ┌──────────────────────────────────────┐    │
│  │ struct Segmenter         │   │ segment::pattern / classifier         │    │
│  │ • dict: Arc<Dictionary>  │   │ • EMAIL / URL / HOST / NUMBER         │    │
│  │ • segment()              │   │ • classify(span) -> TokenType         │    │
│  │ • segment_bytes()        │   └──────────────────────────────────────┘    │
│  └──────────────────────────┘                                                │
│                                                                               │
│  ┌──────────────────────────┐   enum TokenizeOption                          │
│  │ struct Token             │   • Normal  keep URLs/hosts whole              │
│  │ • text, token_type       │   • Host    split hostnames into labels        │
│  │ • start, end, position   │   • Url     split URLs into parts              │
│  └──────────────────────────┘                                                │
└───────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── ANALYSIS ──────────────────────────────────┐
│                                                                               │
│  ┌──────────────────────────┐   ┌──────────────────────────────────────┐    │
│  │ struct Analyzer          │   │ struct AnalyzerRegistry               │    │
│  │ • tokenizer: Box<dyn>    │   │ • factories: name -> Fn() -> Analyzer │    │
│  │ • filters: Vec<Box<dyn>> │   │ • create() / register() / global()    │    │
│  │ • analyze() / offsets()  │   └──────────────────────────────────────┘    │
│  └──────────────────────────┘                                                │
│                                                                               │
│  Tokenizer: VietnameseTokenizer │ StandardTokenizer                          │
│  TokenFilter: lowercase │ stop_words │ stemmer │ punctuation                 │
└───────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── PROCEDURES ────────────────────────────────┐
│                                                                               │
│  procedures::tokenize(text, config) -> stream of TokenResult                 │
│  procedures::tokens(text, config)   -> Vec<String>                           │
│  config map: dictPath │ keepPunctuation │ splitHost │ splitURL               │
└───────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── RELATIONSHIPS ─────────────────────────────┐
│                                                                               │
│  procedures ──parses──> VietnameseConfig ──selects──> TokenizeOption         │
│       │                                                                       │
│       └──uses──> dict::dictionary_for ──shares──> Arc<Dictionary>            │
│                                                        │                      │
│  AnalyzerRegistry ──creates──> Analyzer ──runs──> VietnameseTokenizer        │
│                                                        │                      │
│                                       Segmenter ──queries──> Dictionary      │
└───────────────────────────────────────────────────────────────────────────────┘
*/
