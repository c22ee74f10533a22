mod test_refresh;
mod test_responses;
