mod test_tokens;
