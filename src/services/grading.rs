/// True when the submitted answers match the reference key position by
/// position over the full key length. Comparison is exact string equality;
/// entries beyond the key length are not graded.
pub(crate) fn satisfies_key(answers: &[String], key: &[String]) -> bool {
    answers.len() >= key.len()
        && key.iter().zip(answers).all(|(expected, actual)| expected == actual)
}
