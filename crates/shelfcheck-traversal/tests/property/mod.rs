mod traversal_properties;
