mod lists_option_values_contract;
