/// English function words and high-frequency verbs excluded from scoring.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "by", "for", "from", "has", "he", "in",
    "is", "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "would", "you",
    "your", "this", "they", "their", "them", "these", "those", "than", "then", "there", "when",
    "where", "who", "which", "what", "how", "why", "can", "could", "should", "may", "might",
    "must", "shall", "do", "does", "did", "have", "had", "having", "am", "were", "being", "get",
    "got", "getting", "give", "given", "giving", "go", "going", "gone", "make", "made", "making",
    "take", "taken", "taking", "come", "came", "coming", "know", "known", "knowing", "see",
    "seen", "seeing", "look", "looking", "looked", "use", "used", "using", "find", "found",
    "finding", "work", "worked", "working", "call", "called", "calling", "try", "tried",
    "trying", "ask", "asked", "asking", "need", "needed", "needing", "feel", "felt", "feeling",
    "become", "became", "becoming", "leave", "left", "leaving", "put", "putting", "mean",
    "meant", "meaning", "keep", "kept", "keeping", "let", "letting", "begin", "began",
    "beginning", "seem", "seemed", "seeming", "turn", "turned", "turning", "start", "started",
    "starting", "show", "showed", "showing", "hear", "heard", "hearing", "play", "played",
    "playing", "run", "ran", "running", "move", "moved", "moving", "live", "lived", "living",
    "believe", "believed", "believing", "hold", "held", "holding", "bring", "brought",
    "bringing", "happen", "happened", "happening", "write", "wrote", "written", "writing",
    "provide", "provided", "providing", "sit", "sat", "sitting", "stand", "stood", "standing",
    "lose", "lost", "losing", "pay", "paid", "paying", "meet", "met", "meeting", "include",
    "included", "including", "continue", "continued", "continuing", "set", "setting", "learn",
    "learned", "learning", "change", "changed", "changing", "lead", "led", "leading",
    "understand", "understood", "understanding", "watch", "watched", "watching", "follow",
    "followed", "following", "stop", "stopped", "stopping", "create", "created", "creating",
    "speak", "spoke", "spoken", "speaking", "read", "reading", "allow", "allowed", "allowing",
    "add", "added", "adding", "spend", "spent", "spending", "grow", "grew", "grown", "growing",
    "open", "opened", "opening", "walk", "walked", "walking", "win", "won", "winning", "offer",
    "offered", "offering", "remember", "remembered", "remembering", "love", "loved", "loving",
    "consider", "considered", "considering",
];
