use relin::{
    automata::Nfa,
    grammars::{RegularGrammar, WordGenerator},
};

// Variant 20: VN = {S, A, B, C}, VT = {a, b, c, d}, start symbol S.
fn variant_20() -> RegularGrammar {
    RegularGrammar::from_productions("S", &["S → dA", "A → d | aB", "B → bC", "C → cA | aS"])
        .expect("the variant 20 grammar is right-linear")
}

fn regular_grammar_to_nfa() {
    let grammar = variant_20();

    println!("Grammar:\n{}", grammar.definition());

    let generator = WordGenerator::new(&grammar);
    println!("Generated words:");
    for word in generator.generate(15) {
        println!("  {}", word);
    }

    let nfa = Nfa::from(&grammar);

    println!("\nNFA:\n{}", nfa.transition_table());
    println!("\nNFA Definition:\n{}", nfa.definition());

    for word in ["dd", "dabcd", "dabadd", "abc", "dabca", "dabcad"] {
        println!("accepts({:?}) = {}", word, nfa.accepts(word));
    }
}

fn main() {
    regular_grammar_to_nfa();
}
