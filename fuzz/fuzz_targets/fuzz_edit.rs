#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfedit::{EditError, Editor, at_char, char_length, utf8, utf16};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(u32),
    Insert { index: u8, codepoint: u32 },
    Remove { index: u8, count: u8 },
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Script {
    capacity: u8,
    initial: String,
    ops: Vec<Op>,
}

fn encoded_len_utf8(model: &[char]) -> usize {
    model.iter().map(|c| c.len_utf8()).sum()
}

fn encoded_len_utf16(model: &[char]) -> usize {
    model.iter().map(|c| c.len_utf16()).sum()
}

/// Applies `op` to the model, using the outcome the editor reported.
fn apply(model: &mut Vec<char>, op: &Op, outcome: Result<(), EditError>) {
    if outcome.is_err() {
        return;
    }
    match *op {
        Op::Push(cp) => model.push(char::from_u32(cp).expect("accepted codepoint is a char")),
        Op::Insert { index, codepoint } => model.insert(
            usize::from(index),
            char::from_u32(codepoint).expect("accepted codepoint is a char"),
        ),
        Op::Remove { index, count } => {
            let from = usize::from(index);
            let to = (from + usize::from(count)).min(model.len());
            model.drain(from..to);
        }
        Op::Clear => model.clear(),
    }
}

/// Whether an edit of the model should have been accepted with `capacity`
/// units and the given width function.
fn fits(model: &[char], op: &Op, capacity: usize, len: fn(&[char]) -> usize) -> bool {
    let grow = |cp: u32| match char::from_u32(cp) {
        Some(c) if c != '\0' => len(&[c]),
        _ => usize::MAX / 2,
    };
    match *op {
        Op::Push(cp) => len(model) + grow(cp) < capacity,
        Op::Insert { index, codepoint } => {
            usize::from(index) <= model.len() && len(model) + grow(codepoint) < capacity
        }
        Op::Remove { index, count } => usize::from(index) < model.len() && count > 0,
        Op::Clear => true,
    }
}

fn run<U: utfedit::CodeUnit>(
    script: &Script,
    mut buf: Vec<U>,
    len: fn(&[char]) -> usize,
    collect: fn(&[U]) -> Vec<char>,
) {
    let capacity = buf.len();
    let mut model: Vec<char> = script.initial.chars().collect();
    let mut editor = Editor::new(&mut buf);

    for op in &script.ops {
        // Zero encodes to the terminator and surrogates are encodable but not
        // chars; the model cannot follow either.
        if let Op::Push(cp) | Op::Insert { codepoint: cp, .. } = *op
            && (cp == 0 || (0xD800..=0xDFFF).contains(&cp))
        {
            continue;
        }
        let outcome = match *op {
            Op::Push(cp) => editor.push(cp).map(drop),
            Op::Insert { index, codepoint } => editor.insert(usize::from(index), codepoint),
            Op::Remove { index, count } => editor
                .remove(usize::from(index), usize::from(count))
                .map(drop),
            Op::Clear => {
                editor.clear();
                Ok(())
            }
        };
        let expected = fits(&model, op, capacity, len);
        assert_eq!(outcome.is_ok(), expected, "{op:?} on {model:?}: {outcome:?}");
        apply(&mut model, op, outcome);

        assert_eq!(collect(editor.as_units()), model);
        assert_eq!(editor.char_len(), model.len());
    }

    let buf = editor.into_inner();
    assert_eq!(char_length(buf), model.len());
    assert!(at_char(buf, model.len()).is_none());
}

fn seed<U: utfedit::CodeUnit>(
    capacity: usize,
    initial: &str,
    encode: fn(&mut [U], u32) -> usize,
) -> Option<Vec<U>> {
    let mut buf = vec![U::default(); capacity];
    for c in initial.chars() {
        if c == '\0' || encode(&mut buf, u32::from(c)) == 0 {
            return None;
        }
    }
    Some(buf)
}

fuzz_target!(|script: Script| {
    let capacity = usize::from(script.capacity);

    if let Some(buf) = seed(capacity, &script.initial, utf8::encode_append) {
        run(&script, buf, encoded_len_utf8, |units| {
            std::str::from_utf8(units)
                .expect("editor content is valid UTF-8")
                .chars()
                .collect()
        });
    }
    if let Some(buf) = seed(capacity, &script.initial, utf16::encode_append) {
        run(&script, buf, encoded_len_utf16, |units| {
            char::decode_utf16(units.iter().copied())
                .collect::<Result<_, _>>()
                .expect("editor content is valid UTF-16")
        });
    }
});
