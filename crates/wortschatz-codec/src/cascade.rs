/// Substitution table mined from a full dataset snapshot. Order is part
/// of the format: a pattern may embed the token of an earlier rule but
/// never a later one, so replaying the list backwards restores the
/// exact input text.
pub(crate) const RULES: [(&str, &str); 26] = [
    (
        "=er|=e|=es|=e|=en|=e|=es|=e|=em|=er|=em|=en|=en|=er|=en|=er\t=e|=e|=e|=en|=en|=e|=e|=en|=en|=en|=en|=en|=en|=en|=en|=en\t=er|=e|=es|=en|=en|=e|=es|=en|=en|=en|=en|=en|=en|=en|=en|=en",
        "$a%",
    ),
    (
        "=ster|=ste|=stes|=ste|=sten|=ste|=stes|=ste|=stem|=ster|=stem|=sten|=sten|=ster|=sten|=ster\t=ste|=ste|=ste|=sten|=sten|=ste|=ste|=sten|=sten|=sten|=sten|=sten|=sten|=sten|=sten|=sten\t=ster|=ste|=stes|=sten|=sten|=ste|=stes|=sten|=sten|=sten|=sten|=sten|=sten|=sten|=sten|=sten",
        "$b%",
    ),
    (
        "=le|=lst|=lt|=lt|=ln\t=lte|=ltest|=lte|=ltet|=lten\t=le|=lst|=le|=lt|=ln\t=lte|=ltest|=lte|=ltet|=lten",
        "$c%",
    ),
    (
        "=e|=st|=t|=t|=en\t=te|=test|=te|=tet|=ten\t=e|=est|=e|=et|=en\t=te|=test|=te|=tet|=ten\t=e du\t=t ihr\t=en Sie\t=t\t=end\tzu =en",
        "$d%",
    ),
    ("f\tf\tf\tf\t=|=en|=|=en|=|=en|=|=en", "$e%"),
    (
        "|=t|=t|=en\t=te|=test|=te|=tet|=ten\t=e|=est|=e|=et|=en\t=te|=test|=te|=tet|=ten\t=e du\t=t ihr\t=en Sie",
        "$f%",
    ),
    ("\tf\tf\tf\tf\tf\tf\t$a%\t=", "$g%"),
    ("\tf\tf\tf\tf\t=|=n|=|=n|=|=n|=|=n\n", "$h%"),
    ("\tf\tf\tf\t=|=e|=|=e|=|=en|=es|=e\n", "$i%"),
    (
        "\tf\t=e|=est|=et|=et|=en\t=ete|=etest|=ete|=etet|=eten\t=e|=est|=e|=et|=en\t=ete|=etest|=ete|=etet|=eten\t=e du\t=et ihr\t=en Sie\t",
        "$j%",
    ),
    ("t ~|=en ~\t=te ~|=test ~|=te ~|=tet ~|=ten ~\t=e ", "$k%"),
    (
        "\tt\t=e ~|=st ~|=t ~|=$k%~|=est ~|=e ~|=e$k%du ~\t=t ihr ~\t=en Sie ~\t~ge=t\t~=end\t~zu=en",
        "$l%",
    ),
    ("\tf\tf\tf\tf\tf\tf\t$b%\t=er\tf\tam =sten\t", "$m%"),
    ("|=rt|=rn\t=rte|=rtest|=rte|=rtet|=rten\t=re", "$n%"),
    ("en ~\t=e ~|=est ~|=e ~|=et ~|=en ~\t", "$o%"),
    ("\tf\t=e|=st$f%\tge=t\t=end\tzu =en\n", "$p%"),
    ("\tf\tf\tf\t=|=|=|=|=|=", "$q%"),
    ("sten\tf\t\nadjective\t", "$r%"),
    ("\tf\tf\tf\tt\tf\tf\t$a%\t\tf\t\tf\t", "$s%"),
    ("\tf\tt\tf\t=||=||=||=", "$t%"),
    ("00$g%er\tf\tam =sten\tf\t", "$u%"),
    ("du ~\t=t ihr ~\t=en Sie ~\t~ge", "$v%"),
    ("\t~=end\t~zu=en\nverb\ther", "$w%"),
    ("\t\tf\tf\tf\tf\tf\tf\t$b%\t=r\tf\tam =", "$x%"),
    ("\tf\tf\tf\t=|=s|=|=s|=|=s|=s|=s\n", "$y%"),
    ("\tf\tf\tf\t=|=e|=|=e|=|=en|=s|=e\n", "$z%"),
];

/// Collapse recurring paradigm runs into three-byte tokens.
pub fn apply(text: &str) -> String {
    let mut out = text.to_owned();
    for &(pattern, token) in RULES.iter() {
        out = out.replace(pattern, token);
    }
    out
}

/// Expand tokens back into their patterns, newest rule first.
pub fn revert(text: &str) -> String {
    let mut out = text.to_owned();
    for &(pattern, token) in RULES.iter().rev() {
        out = out.replace(token, pattern);
    }
    out
}
